//! The co-starring graph: people, movies, and who starred in what.
//!
//! `CoStarGraph` is a plain value built once by a loader and then shared by
//! reference. Two people are adjacent when they share at least one movie; the
//! movie labels the edge. The relation is symmetric by construction because
//! both directions are derived from the same `stars` record.
//!
//! All maps are `BTree*` so iteration, neighbor enumeration and the content
//! digest are deterministic.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::proof::canon::{canonical_json_bytes, CanonError};
use crate::proof::hash::{canonical_hash, ContentHash, DOMAIN_COSTAR_GRAPH};

/// Identifier of a person (an IMDB-style id string).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PersonId(String);

/// Identifier of a movie.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MovieId(String);

macro_rules! string_id {
    ($ty:ident) => {
        impl $ty {
            #[must_use]
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl std::fmt::Display for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $ty {
            fn from(id: &str) -> Self {
                Self(id.to_string())
            }
        }
    };
}

string_id!(PersonId);
string_id!(MovieId);

/// A person record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    pub name: String,
    /// Birth year as given by the source data; may be missing.
    pub birth: Option<String>,
    movies: BTreeSet<MovieId>,
}

impl Person {
    /// Movies this person starred in.
    #[must_use]
    pub fn movies(&self) -> &BTreeSet<MovieId> {
        &self.movies
    }
}

/// A movie record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Movie {
    pub title: String,
    pub year: Option<String>,
    stars: BTreeSet<PersonId>,
}

impl Movie {
    /// People who starred in this movie.
    #[must_use]
    pub fn stars(&self) -> &BTreeSet<PersonId> {
        &self.stars
    }
}

/// Failure while building a [`CoStarGraph`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    #[error("person {id} is already present")]
    DuplicatePerson { id: PersonId },
    #[error("movie {id} is already present")]
    DuplicateMovie { id: MovieId },
    /// Raised by strict loaders; [`CoStarGraph::add_star`] skips such records.
    #[error("star record ({person}, {movie}) names an unknown person or movie")]
    UnknownStarRecord { person: PersonId, movie: MovieId },
}

/// People, movies and the lower-cased name index.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CoStarGraph {
    people: BTreeMap<PersonId, Person>,
    movies: BTreeMap<MovieId, Movie>,
    names: BTreeMap<String, BTreeSet<PersonId>>,
}

impl CoStarGraph {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a person and index their name (case-insensitively).
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::DuplicatePerson`] if `id` is already present.
    pub fn add_person(
        &mut self,
        id: PersonId,
        name: impl Into<String>,
        birth: Option<String>,
    ) -> Result<(), GraphError> {
        if self.people.contains_key(&id) {
            return Err(GraphError::DuplicatePerson { id });
        }
        let name = name.into();
        self.names
            .entry(name.to_lowercase())
            .or_default()
            .insert(id.clone());
        self.people.insert(
            id,
            Person {
                name,
                birth,
                movies: BTreeSet::new(),
            },
        );
        Ok(())
    }

    /// Add a movie with no stars yet.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::DuplicateMovie`] if `id` is already present.
    pub fn add_movie(
        &mut self,
        id: MovieId,
        title: impl Into<String>,
        year: Option<String>,
    ) -> Result<(), GraphError> {
        if self.movies.contains_key(&id) {
            return Err(GraphError::DuplicateMovie { id });
        }
        self.movies.insert(
            id,
            Movie {
                title: title.into(),
                year,
                stars: BTreeSet::new(),
            },
        );
        Ok(())
    }

    /// Record that `person` starred in `movie`.
    ///
    /// Star records naming an unknown person or movie are skipped, matching
    /// how partial data dumps are loaded. Returns whether the record was
    /// applied.
    pub fn add_star(&mut self, person: &PersonId, movie: &MovieId) -> bool {
        let (Some(p), Some(m)) = (self.people.get_mut(person), self.movies.get_mut(movie)) else {
            return false;
        };
        p.movies.insert(movie.clone());
        m.stars.insert(person.clone());
        true
    }

    #[must_use]
    pub fn person(&self, id: &PersonId) -> Option<&Person> {
        self.people.get(id)
    }

    #[must_use]
    pub fn movie(&self, id: &MovieId) -> Option<&Movie> {
        self.movies.get(id)
    }

    #[must_use]
    pub fn contains_person(&self, id: &PersonId) -> bool {
        self.people.contains_key(id)
    }

    #[must_use]
    pub fn person_count(&self) -> usize {
        self.people.len()
    }

    #[must_use]
    pub fn movie_count(&self) -> usize {
        self.movies.len()
    }

    /// All person ids whose name matches `name`, ignoring case.
    #[must_use]
    pub fn person_ids_for_name(&self, name: &str) -> Vec<PersonId> {
        self.names
            .get(&name.to_lowercase())
            .map(|ids| ids.iter().cloned().collect())
            .unwrap_or_default()
    }

    /// `(movie, co-star)` pairs for everyone who starred with `person`.
    ///
    /// The person appears among their own co-stars; search callers suppress
    /// that pair through the explored set. Unknown persons have no neighbors.
    #[must_use]
    pub fn neighbors_for_person(&self, person: &PersonId) -> BTreeSet<(MovieId, PersonId)> {
        let mut neighbors = BTreeSet::new();
        let Some(p) = self.people.get(person) else {
            return neighbors;
        };
        for movie_id in &p.movies {
            if let Some(movie) = self.movies.get(movie_id) {
                for star in &movie.stars {
                    neighbors.insert((movie_id.clone(), star.clone()));
                }
            }
        }
        neighbors
    }

    /// JSON view used for the content digest. Stars are listed per movie.
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        let people: serde_json::Map<String, serde_json::Value> = self
            .people
            .iter()
            .map(|(id, p)| {
                (
                    id.to_string(),
                    serde_json::json!({"birth": p.birth, "name": p.name}),
                )
            })
            .collect();
        let movies: serde_json::Map<String, serde_json::Value> = self
            .movies
            .iter()
            .map(|(id, m)| {
                (
                    id.to_string(),
                    serde_json::json!({"stars": m.stars, "title": m.title, "year": m.year}),
                )
            })
            .collect();
        serde_json::json!({"movies": movies, "people": people})
    }

    /// Content hash of the graph under [`DOMAIN_COSTAR_GRAPH`].
    ///
    /// # Errors
    ///
    /// Returns [`CanonError`] if canonical serialization fails.
    pub fn digest(&self) -> Result<ContentHash, CanonError> {
        let bytes = canonical_json_bytes(&self.to_json_value())?;
        Ok(canonical_hash(DOMAIN_COSTAR_GRAPH, &bytes))
    }
}
