//! Three-term recurrence relations
//!
//! ```text
//! NEXT = STEP(PREVIOUS, CURRENT, index)
//! ```
//!
//! Every classical orthogonal polynomial sequence (Legendre Pn, Chebyshev Tn/Un and
//! their derivatives) is produced by such a rule from a couple of leading members.
use nalgebra::DVector;

/// Computes the recurrence members from 0 to maxindex (>=0).
///
/// If `maxindex` falls inside the seed, the truncated seed is returned. Otherwise the
/// seed is emitted and `step(prev, curr, index)` is applied, `index` being the index
/// of `curr`, until `maxindex + 1` members exist.
pub fn run_recurr<T, F>(start_seq: Vec<T>, maxindex: usize, mut step: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, &T, usize) -> T,
{
    if maxindex < start_seq.len() {
        let mut seq = start_seq;
        seq.truncate(maxindex + 1);
        return seq;
    }
    assert!(
        start_seq.len() >= 2,
        "recurrence needs at least two leading members"
    );

    let start_index = start_seq.len() - 1;
    let mut seq = Vec::with_capacity(maxindex + 1);
    seq.extend(start_seq);

    for index in start_index..maxindex {
        let next = step(&seq[index - 1], &seq[index], index);
        seq.push(next);
    }
    seq
}

/// Strategy of a three-term recurrence over a set of nodes.
pub trait RecurrTriplet {
    /// Generates the leading recurrence members.
    fn gen_start_seq(&self, nodes: &DVector<f64>) -> Vec<DVector<f64>>;

    /// Computes the next member of the recurrence.
    fn compute_next(
        &self,
        nodes: &DVector<f64>,
        prev: &DVector<f64>,
        curr: &DVector<f64>,
        index: usize,
    ) -> DVector<f64>;

    /// Computes the recurrence members from 0 to maxindex (>=0).
    fn get_sequence(&self, nodes: &DVector<f64>, maxindex: usize) -> Vec<DVector<f64>> {
        let start_seq = self.gen_start_seq(nodes);
        run_recurr(start_seq, maxindex, |prev, curr, index| {
            self.compute_next(nodes, prev, curr, index)
        })
    }
}
