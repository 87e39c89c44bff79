// testing utilities for generating changelog fixtures

pub mod fixture_builder;
pub mod scenarios;

pub use fixture_builder::{TestFixture, TestFixtureBuilder};
pub use scenarios::TestScenario;
