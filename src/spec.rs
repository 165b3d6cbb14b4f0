use serde::Deserialize;
use std::{fs, path::Path};

static SPEC_PATH: &str = "./beatmark.json";

/// A file that specifies which marker dump to read and where the downbeats go.
/// Every field has a default, so a partial file (or no file at all) works.
#[derive(Deserialize, Clone)]
pub struct Spec {
	#[serde(default = "default_markers")]
	pub markers: String,
	#[serde(default = "default_output")]
	pub output: String,
	#[serde(default = "default_delimiter")]
	pub delimiter: char,
	#[serde(default = "default_field")]
	pub field: usize,
	#[serde(default = "default_malformed")]
	pub malformed: Malformed,
}

/// What to do with a marker line that has no field at the configured index.
#[derive(Deserialize, Clone, Copy, Debug, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum Malformed {
	Fail,
	Skip,
}

fn default_markers() -> String {
	"Markers.txt".to_string()
}

fn default_output() -> String {
	"downbeats.txt".to_string()
}

fn default_delimiter() -> char {
	' '
}

fn default_field() -> usize {
	1
}

fn default_malformed() -> Malformed {
	Malformed::Fail
}

impl Default for Spec {
	fn default() -> Spec {
		Spec {
			markers: default_markers(),
			output: default_output(),
			delimiter: default_delimiter(),
			field: default_field(),
			malformed: default_malformed(),
		}
	}
}

impl Spec {
	pub fn load() -> Spec {
		if !Path::new(SPEC_PATH).exists() {
			return Spec::default();
		}
		serde_json::from_str(&fs::read_to_string(SPEC_PATH).expect("Couldn't read spec"))
			.expect("Couldn't interpret spec")
	}
	pub fn read_markers(&self) -> String {
		fs::read_to_string(self.markers.clone()).expect("Couldn't read markers")
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_defaults_match_the_fixed_names() {
		let spec = Spec::default();
		assert_eq!(spec.markers, "Markers.txt");
		assert_eq!(spec.output, "downbeats.txt");
		assert_eq!(spec.delimiter, ' ');
		assert_eq!(spec.field, 1);
		assert_eq!(spec.malformed, Malformed::Fail);
	}

	#[test]
	fn test_partial_spec_fills_in_defaults() {
		let spec: Spec = serde_json::from_str(r#"{"markers": "Session1.txt"}"#).unwrap();
		assert_eq!(spec.markers, "Session1.txt");
		assert_eq!(spec.output, "downbeats.txt");
		assert_eq!(spec.field, 1);
		assert_eq!(spec.malformed, Malformed::Fail);
	}

	#[test]
	fn test_skip_mode_parses() {
		let spec: Spec = serde_json::from_str(r#"{"malformed": "skip"}"#).unwrap();
		assert_eq!(spec.malformed, Malformed::Skip);
	}

	#[test]
	fn test_empty_spec_is_all_defaults() {
		let spec: Spec = serde_json::from_str("{}").unwrap();
		assert_eq!(spec.markers, "Markers.txt");
		assert_eq!(spec.delimiter, ' ');
	}
}
