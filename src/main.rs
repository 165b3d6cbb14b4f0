use markers::Downbeats;
use spec::Spec;
mod markers;
mod spec;

fn main() {
	let spec: Spec = Spec::load();
	let downbeats: Downbeats = spec.clone().into();
	downbeats.write(spec);
}
