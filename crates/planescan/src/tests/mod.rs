#![allow(missing_docs)]

pub mod simple;

#[allow(missing_docs)]
#[macro_export]
macro_rules! testgen_plane_scan {
    () => {
        mod plane_scan {
            use super::*;

            $crate::testgen_scan_ops!();
        }
    };
}
