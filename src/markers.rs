use crate::spec::{Malformed, Spec};
use std::{fs, io::Write};

/// The extracted downbeat timings, one per marker line, in marker order.
pub struct Downbeats {
	pub values: Vec<String>,
}

impl Into<Downbeats> for Spec {
	fn into(self) -> Downbeats {
		println!("Loading markers");
		let markers = self.read_markers();
		Downbeats::extract(&markers, &self)
	}
}

#[allow(dead_code)]
impl Downbeats {
	pub fn extract(markers: &str, spec: &Spec) -> Downbeats {
		let mut values = vec![];
		for (number, line) in markers.lines().enumerate() {
			match line.split(spec.delimiter).nth(spec.field) {
				Some(value) => values.push(value.to_string()),
				None if spec.malformed == Malformed::Skip => {
					println!("Skipping marker {} with no field {}", number + 1, spec.field)
				}
				None => panic!("No field {} in marker at line {}", spec.field, number + 1),
			}
		}
		Downbeats { values }
	}

	pub fn write(&self, spec: Spec) {
		println!("Writing {} downbeats", self.values.len());
		let mut file = fs::OpenOptions::new()
			.write(true)
			.create(true)
			.truncate(true)
			.open(&spec.output)
			.expect("Couldn't open output");
		for value in &self.values {
			writeln!(file, "{}", value).expect("Couldn't write downbeat");
		}
		println!("Done!");
	}
}
