//! Document writers.

mod hcl_writer;

pub use hcl_writer::HclWriter;
