//! Core types and definitions for the Galaxian combat simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! geometry, projectiles, components, input intents, audio cues, render
//! snapshots, configuration records, errors, and the collaborator traits
//! the simulation talks to. It has no dependency on any runtime framework.

pub mod collaborators;
pub mod commands;
pub mod components;
pub mod config;
pub mod constants;
pub mod enums;
pub mod error;
pub mod events;
pub mod projectile;
pub mod state;
pub mod types;
