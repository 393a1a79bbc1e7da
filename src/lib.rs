//! Declarative VM creation for Azure and Google Cloud.
//!
//! Section-based config files are parsed into instance records, validated
//! against per-provider rules and turned into `az vm create` /
//! `gcloud compute instances create` command lines, which are then run one
//! at a time after operator confirmation.

pub mod automation;
pub mod config;
pub mod pipeline;
pub mod utils;
