//! Vocabularies built on the generic matrix / instrument / composer core
//!
//! Two-axis vocabularies (flows, tasks, sensors) emit `&'static Signal`s from
//! their shared matrix. Single-axis vocabularies (logs, cycles, stacks) emit
//! their sign directly.

pub mod cycles;
pub mod flows;
pub mod logs;
pub mod sensors;
pub mod stacks;
pub mod tasks;
