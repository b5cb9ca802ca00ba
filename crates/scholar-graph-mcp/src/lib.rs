//! Scholar Graph MCP Server
//!
//! A Model Context Protocol (MCP) server for the Semantic Scholar Graph API.
//! Lets LLM agents search papers and authors, walk citations and references,
//! and download open access PDFs.
//!
//! # Features
//!
//! - **11 MCP Tools**: search, lookup, citation graph and PDF tools
//! - **One call per tool**: no retries or caching; failures become actionable text
//! - **Lenient inputs**: numbers and booleans as strings, lists as comma strings
//! - **Safe downloads**: sanitized names, never overwrites, optional PDF metadata
//!
//! # Example
//!
//! ```no_run
//! use scholar_graph_mcp::{client::ScholarClient, config::Config};
//! use scholar_graph_mcp::client::request;
//! use scholar_graph_mcp::models::GetPaperInput;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env()?;
//!     let client = ScholarClient::new(&config)?;
//!
//!     let input = GetPaperInput { paper_id: "DOI:10.1038/nature14539".into(), fields: None };
//!     let paper = client.execute(&request::get_paper(&input)?).await?;
//!     println!("{paper}");
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod formatters;
pub mod models;
pub mod pdf;
pub mod server;
pub mod tools;

pub use client::ScholarClient;
pub use config::Config;
pub use error::{ClientError, ToolError};
