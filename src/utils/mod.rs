//! Utility functions and helpers

pub mod formats;

pub use formats::{from_sprs_csc, from_sprs_csr, to_sprs_csc, to_sprs_csr};

/// Exclusive prefix sum of `counts` written into `ptr`
///
/// `ptr` must have length `counts.len() + 1`; on return `ptr[0] == 0` and
/// `ptr[counts.len()]` holds the total.
pub fn exclusive_scan_into(counts: &[usize], ptr: &mut [usize]) {
    assert_eq!(
        ptr.len(),
        counts.len() + 1,
        "ptr.len() must be counts.len() + 1"
    );

    let mut sum = 0;
    for (slot, &count) in ptr.iter_mut().zip(counts) {
        *slot = sum;
        sum += count;
    }
    ptr[counts.len()] = sum;
}
