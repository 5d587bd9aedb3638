//! Shared workload builders for degrees benchmark suites.

use degrees_harness::worlds::grid::GridWorld;
use degrees_kernel::costar::{CoStarGraph, MovieId, PersonId};

/// Square open field with a wall border, start top-left and goal
/// bottom-right. `side` is the interior width.
///
/// # Panics
///
/// Panics if `side` is zero. Benchmark setup failures are fatal.
#[must_use]
pub fn open_field(side: usize) -> GridWorld {
    let border = "#".repeat(side + 2);
    let mut text = format!("{border}\n");
    for row in 0..side {
        let mut line = String::from("#");
        for col in 0..side {
            line.push(match (row, col) {
                (0, 0) => 'A',
                (r, c) if r == side - 1 && c == side - 1 => 'B',
                _ => ' ',
            });
        }
        line.push_str("#\n");
        text.push_str(&line);
    }
    text.push_str(&border);
    GridWorld::parse(&text).expect("open field is well formed")
}

/// Serpentine maze: full-width corridors joined at alternating ends, so the
/// only path visits every open cell.
///
/// # Panics
///
/// Panics if `corridors` is zero. Benchmark setup failures are fatal.
#[must_use]
pub fn serpentine(corridors: usize, width: usize) -> GridWorld {
    let border = "#".repeat(width + 2);
    let mut rows = vec![border.clone()];
    for i in 0..corridors {
        let mut corridor = " ".repeat(width);
        if i == 0 {
            corridor.replace_range(0..1, "A");
        }
        if i == corridors - 1 {
            let end = if i % 2 == 0 { width - 1 } else { 0 };
            corridor.replace_range(end..=end, "B");
        }
        rows.push(format!("#{corridor}#"));
        if i + 1 < corridors {
            let gap = if i % 2 == 0 { width } else { 1 };
            let mut wall: Vec<char> = border.chars().collect();
            wall[gap] = ' ';
            rows.push(wall.into_iter().collect());
        }
    }
    rows.push(border);
    GridWorld::parse(&rows.join("\n")).expect("serpentine is well formed")
}

/// Chain of `people` co-stars: movie `i` stars persons `i - 1` and `i`.
///
/// # Panics
///
/// Panics if the generated ids collide or a star record dangles. Benchmark
/// setup failures are fatal.
#[must_use]
pub fn costar_chain(people: usize) -> CoStarGraph {
    let mut graph = CoStarGraph::new();
    for i in 0..people {
        graph
            .add_person(PersonId::new(format!("p{i}")), format!("Person {i}"), None)
            .expect("person ids are unique");
    }
    for i in 1..people {
        let movie = MovieId::new(format!("m{i}"));
        graph
            .add_movie(movie.clone(), format!("Movie {i}"), None)
            .expect("movie ids are unique");
        for star in [i - 1, i] {
            assert!(
                graph.add_star(&PersonId::new(format!("p{star}")), &movie),
                "star p{star} in {movie} dangles"
            );
        }
    }
    graph
}
