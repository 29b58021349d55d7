// Job-posting extraction: URL or pasted text in, six structured fields out.
// All model calls go through llm_client — no direct provider calls here.

pub mod client;
pub mod error;
pub mod fetcher;
pub mod handlers;
pub mod models;
pub mod normalizer;
pub mod prompts;
pub mod service;
pub mod validator;

#[cfg(test)]
pub mod testing;
