extern crate std;

mod sinks;

use std::vec::Vec;

use crate::{Packer, Result};

/// Run one encode sequence into a fresh Vec and return the bytes.
fn packed(f: impl FnOnce(&mut Packer<'_, Vec<u8>>) -> Result<()>) -> Vec<u8> {
    let mut buf = Vec::new();
    let mut packer = Packer::new(&mut buf);
    f(&mut packer).unwrap();
    buf
}
