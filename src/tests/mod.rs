extern crate std;

mod sink;
