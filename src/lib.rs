//! UTI Intake - Pharmacist Minor-Ailment Screening
//!
//! This crate implements a linear clinical-intake questionnaire that screens
//! patients for pharmacist treatment of an uncomplicated urinary tract
//! infection, ending in either a referral or a summary for the pharmacist.

pub mod adapters;
pub mod config;
pub mod domain;
