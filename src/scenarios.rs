use reforge_capture::{Constructor, Replay, capture, reconstruct};
use reforge_handle::ClonePtr;
use reforge_reconstructable::Reconstructable;
use tracing::info;

use super::NonCopyable;

pub fn clone_ptr() {
	info!("clone pointer from a single argument");
	{
		let x = ClonePtr::<NonCopyable>::new((1,));
		let mut y = x.clone();
		y.y = 3;
		let z = y.clone();

		println!("x = {{1}}                     : {}", *x);
		println!("y = x.ctor(), modified      : {}", *y);
		println!("z = y.ctor()                : {}", *z);
	}

	info!("clone pointer from two arguments");
	{
		let x = ClonePtr::<NonCopyable>::new((1, 2));
		let mut y = x.clone();
		y.y = 3;
		let z = y.clone();

		println!("x = {{1, 2}}                  : {}", *x);
		println!("y = x.ctor(), modified      : {}", *y);
		println!("z = y.ctor()                : {}", *z);
	}
}

pub fn reset() {
	info!("clone pointer reset");

	let mut x = ClonePtr::<NonCopyable>::new((1, 2));
	x.y = 3;
	println!("x = {{1, 2}}, modified        : {}", *x);

	x.reset();
	println!("x.reset()                   : {}", *x);
}

pub fn reconstruct_in_place() {
	info!("reconstruct from captured arguments");
	{
		let mut x = NonCopyable::new(1, 2);
		println!("x = {{1, 2}}                  : {x}");

		Constructor::from_captured(capture((3, 4))).reconstruct(&mut x);
		println!("reconstruct(x, 3, 4)        : {x}");
	}

	info!("reconstruct from new arguments");
	{
		let mut x = NonCopyable::new(1, 2);
		println!("x = {{1, 2}}                  : {x}");

		reconstruct(&mut x, (5,));
		println!("reconstruct(x, 5)           : {x}");
	}
}

pub fn reconstructor() {
	info!("boxed reconstructor");
	{
		let mut x = NonCopyable::new(1, 2);
		println!("x = {{1, 2}}                  : {x}");

		let reconstructor: Box<dyn Replay<NonCopyable>> = Constructor::new((3, 4)).into_boxed();
		reconstructor.reconstruct(&mut x);
		println!("reconstruct(x, 3, 4)        : {x}");
	}

	info!("reconstructor with instance");
	{
		let (reconstructor, mut x) = Constructor::<NonCopyable, _>::with_instance((1, 2));
		x.x = 3;
		x.y = 4;
		println!("create with {{1, 2}}, modified: {x}");

		reconstructor.reconstruct(&mut x);
		println!("reconstructed               : {x}");
	}
}

pub fn reconstructable() {
	info!("explicitly guarded reconstructable");
	{
		let mut x = Reconstructable::<NonCopyable>::with_guard(true, (1, 2));
		x.x = 3;
		x.y = 4;
		println!("create with {{1, 2}}, modified: {}", *x);

		x.reset();
		println!("reconstructed               : {}", *x);
	}

	info!("reconstructable");
	{
		let mut x = Reconstructable::<NonCopyable>::new((1, 2));
		x.x = 3;
		x.y = 4;
		println!("create with {{1, 2}}, modified: {}", *x);

		x.reset();
		println!("reconstructed               : {}", *x);
	}
}
