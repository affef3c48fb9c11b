// Recommendation facade: ties quiz scores, job roles, the roadmap and advice
// together for the presentation layer. `facade` is pure, `service` owns the
// store round-trips.

pub mod facade;
pub mod handlers;
pub mod service;
