//! Integration tests for the tagdex file index

mod cli_parse;
mod reconcile_cycle;
mod tag_search;
