//! # docchat
//!
//! A retrieval-augmented chat tool for local PDF and text documents.
//!
//! docchat extracts text from document files, splits it into fixed-size
//! chunks held in memory, and answers questions by forwarding the
//! chunks with the highest keyword overlap — together with the
//! question — to an OpenAI-compatible chat-completions endpoint.
//!
//! ## Architecture
//!
//! ```text
//! ┌───────────┐   ┌───────────────┐   ┌─────────────┐
//! │  Files    │──▶│   Pipeline    │──▶│   Session   │
//! │ pdf/txt/md│   │ Extract+Chunk │   │  (corpus)   │
//! └───────────┘   └───────────────┘   └──────┬──────┘
//!                                            │
//!                       question ──▶ overlap retrieval
//!                                            │
//!                                     ┌──────▼──────┐
//!                                     │ Completion  │
//!                                     │  API (Groq) │
//!                                     └─────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```bash
//! export GROQ_API_KEY=...
//! docchat ask "what does chapter two cover?" -f manual.pdf
//! docchat chat notes.md manual.pdf      # interactive loop
//! docchat inspect manual.pdf            # chunking dry-run
//! ```
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`config`] | TOML configuration parsing |
//! | [`models`] | Core data types |
//! | [`extract`] | Text extraction from document files |
//! | [`chunk`] | Fixed-window text chunking |
//! | [`search`] | Keyword-overlap retrieval |
//! | [`session`] | Corpus + transcript state and error taxonomy |
//! | [`completion`] | Completion client trait and HTTP implementation |
//! | [`chat`] | Question answering and the interactive loop |
//! | [`inspect`] | Extraction/chunking dry-run |

pub mod chat;
pub mod chunk;
pub mod completion;
pub mod config;
pub mod extract;
pub mod inspect;
pub mod models;
pub mod search;
pub mod session;
