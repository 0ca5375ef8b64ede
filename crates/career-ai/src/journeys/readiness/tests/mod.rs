mod common;
mod scoring;
mod stages;
