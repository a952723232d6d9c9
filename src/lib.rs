// Wordmesh: distance-weighted word co-occurrence analysis.
//
// This is the library root. Each module corresponds to one stage of the
// pipeline: tokenize the text, run the windowed analysis pass into the
// relation store, then render the store as JSON or a terminal ranking.

pub mod analyze;
pub mod output;
pub mod stopwords;
pub mod store;
pub mod tokenize;
