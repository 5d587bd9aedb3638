//! The "small" co-starring data set, as an in-code fixture.
//!
//! Sixteen people, five movies. Rain Man reaches the other movies only
//! through Tom Cruise, which gives tests a long chain (Cary Elwes to Tom
//! Cruise, four degrees). Emma Watson starred in nothing listed, so she is
//! the no-path case.

use degrees_kernel::costar::{CoStarGraph, GraphError, MovieId, PersonId};

/// `(id, name, birth)`.
const PEOPLE: [(&str, &str, &str); 16] = [
    ("102", "Kevin Bacon", "1958"),
    ("129", "Tom Cruise", "1962"),
    ("144", "Cary Elwes", "1962"),
    ("158", "Tom Hanks", "1956"),
    ("1597", "Mandy Patinkin", "1952"),
    ("163", "Dustin Hoffman", "1937"),
    ("1697", "Chris Sarandon", "1942"),
    ("193", "Demi Moore", "1962"),
    ("197", "Jack Nicholson", "1937"),
    ("200", "Bill Paxton", "1955"),
    ("398", "Sally Field", "1946"),
    ("420", "Valeria Golino", "1965"),
    ("596520", "Gerald R. Molen", "1935"),
    ("641", "Gary Sinise", "1955"),
    ("705", "Robin Wright", "1966"),
    ("914612", "Emma Watson", "1990"),
];

/// `(id, title, year)`.
const MOVIES: [(&str, &str, &str); 5] = [
    ("112384", "Apollo 13", "1995"),
    ("104257", "A Few Good Men", "1992"),
    ("109830", "Forrest Gump", "1994"),
    ("93779", "The Princess Bride", "1987"),
    ("95953", "Rain Man", "1988"),
];

/// `(person_id, movie_id)`.
const STARS: [(&str, &str); 20] = [
    ("102", "104257"),
    ("102", "112384"),
    ("129", "104257"),
    ("129", "95953"),
    ("144", "93779"),
    ("158", "109830"),
    ("158", "112384"),
    ("1597", "93779"),
    ("163", "95953"),
    ("1697", "93779"),
    ("193", "104257"),
    ("197", "104257"),
    ("200", "112384"),
    ("398", "109830"),
    ("420", "95953"),
    ("596520", "95953"),
    ("641", "109830"),
    ("641", "112384"),
    ("705", "109830"),
    ("705", "93779"),
];

/// Build the small data set.
///
/// # Errors
///
/// Returns [`GraphError`] if the fixture tables repeat an id or a star
/// record names an id missing from them.
pub fn small_costar_graph() -> Result<CoStarGraph, GraphError> {
    graph_from_tables(&PEOPLE, &MOVIES, &STARS)
}

/// Build a graph from `(id, name, birth)`, `(id, title, year)` and
/// `(person_id, movie_id)` tables, rejecting dangling star records.
fn graph_from_tables(
    people: &[(&str, &str, &str)],
    movies: &[(&str, &str, &str)],
    stars: &[(&str, &str)],
) -> Result<CoStarGraph, GraphError> {
    let mut graph = CoStarGraph::new();
    for &(id, name, birth) in people {
        graph.add_person(PersonId::new(id), name, Some(birth.to_string()))?;
    }
    for &(id, title, year) in movies {
        graph.add_movie(MovieId::new(id), title, Some(year.to_string()))?;
    }
    for &(person, movie) in stars {
        let (person, movie) = (PersonId::new(person), MovieId::new(movie));
        if !graph.add_star(&person, &movie) {
            return Err(GraphError::UnknownStarRecord { person, movie });
        }
    }
    Ok(graph)
}
