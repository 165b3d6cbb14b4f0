use crate::markers::Downbeats;
use crate::spec::Spec;

mod markers;
mod spec;

fn main() {
	let spec = Spec::load();
	for value in Downbeats::extract(&spec.read_markers(), &spec).values {
		println!("{}", value);
	}
}
