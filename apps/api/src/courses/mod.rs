// Course catalog, search and enrollment progress. Not part of the rule
// engine; shares only the skill matching primitive with it.

pub mod catalog;
pub mod handlers;
pub mod search;
pub mod service;
