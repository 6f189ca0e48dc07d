//! Fuel station finder server.
//!
//! A web service that answers: "which fuel stations are nearest this
//! postal code?" It resolves the postal code to a coordinate, finds the
//! stations within a radius, and returns them nearest first.

pub mod cache;
pub mod config;
pub mod dataset;
pub mod domain;
pub mod geocoder;
pub mod index;
pub mod search;
pub mod web;
