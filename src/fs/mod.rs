pub mod reader;
pub mod writer;

pub use reader::{parse_fixture, read_fixture, ParsedFixture};
pub use writer::{render, write_fixture, FixtureSummary, FixtureWriter};
