use core::fmt::Debug;

use num_traits::FromPrimitive;
use pretty_assertions::assert_eq;
use rand::{Rng, SeedableRng, distr::Uniform, rngs::StdRng};

use crate::{
    PlaneLaunch, ScanInstruction, ScanStorage, plane_exclusive_scan, plane_exclusive_scan_reduce,
    plane_inclusive_scan, plane_inclusive_scan_reduce, plane_scan, plane_scan_reduce,
};

// Generates one test per (type, plane dimension, instruction). The including
// crate must have a `TestPlane` launcher type in scope.
#[allow(missing_docs)]
#[macro_export]
macro_rules! testgen_scan_ops {
    () => {
        $crate::testgen_scan_ops!(@group: [ty = [u32, u64, i32], dims = [1, 2, 4, 8, 16, 32, 64]]: {
            Sum;
            Prod;
            Max;
            Min;
        });
    };
    (@group: [ty = [$($ty:ty),*], dims = $dims:tt]: $instrs:tt) => {
        $(
            $crate::testgen_scan_ops!(@ty: [$ty, $dims]: $instrs);
        )*
    };
    (@ty: [$ty:ty, [$($dim:literal),*]]: $instrs:tt) => {
        $(
            $crate::testgen_scan_ops!(@case: [$ty, $dim]: $instrs);
        )*
    };
    (@case: [$ty:ty, $dim:literal]: { $($instr:ident;)* }) => {
        $(
            ::paste::paste! {
                #[test]
                fn [<test_ $ty:lower _dim $dim _ $instr:lower>]() {
                    let test = $crate::tests::simple::TestCase { seed: 1234 };
                    test.test_scan::<TestPlane, $ty, $crate::$instr, $dim>();
                }
            }
        )*
    };
}

/// One scan test over a fixed plane dimension: seeded inputs, every
/// operation variant checked against a sequential left fold.
#[derive(Debug)]
pub struct TestCase {
    pub seed: u64,
}

impl TestCase {
    pub fn test_scan<L, N, I, const PLANE_DIM: usize>(&self)
    where
        L: PlaneLaunch<PLANE_DIM>,
        N: Copy + Send + Sync + PartialEq + Debug + FromPrimitive,
        I: ScanInstruction<N>,
    {
        let inputs = self.generate_inputs::<N, PLANE_DIM>();
        // Deliberately not the operator's identity.
        let init = N::from_i64(3).unwrap();

        let expected_inclusive = reference_inclusive::<N, I>(&inputs);
        let expected_exclusive = reference_exclusive::<N, I>(init, &expected_inclusive);
        let expected_reduction = expected_inclusive[PLANE_DIM - 1];

        let storage = ScanStorage::<N, PLANE_DIM>::new();
        let outputs = L::launch(|unit| {
            plane_inclusive_scan(unit, inputs[unit.unit_pos() as usize], &storage, I::apply)
        });
        assert_eq!(outputs.as_slice(), expected_inclusive.as_slice());

        let storage = ScanStorage::<N, PLANE_DIM>::new();
        let outputs = L::launch(|unit| {
            plane_inclusive_scan_reduce(unit, inputs[unit.unit_pos() as usize], &storage, I::apply)
        });
        for (pos, (output, reduction)) in outputs.into_iter().enumerate() {
            assert_eq!(output, expected_inclusive[pos]);
            assert_eq!(reduction, expected_reduction);
        }

        let storage = ScanStorage::<N, PLANE_DIM>::new();
        let outputs = L::launch(|unit| {
            plane_exclusive_scan(
                unit,
                inputs[unit.unit_pos() as usize],
                init,
                &storage,
                I::apply,
            )
        });
        assert_eq!(outputs.as_slice(), expected_exclusive.as_slice());

        let storage = ScanStorage::<N, PLANE_DIM>::new();
        let outputs = L::launch(|unit| {
            plane_exclusive_scan_reduce(
                unit,
                inputs[unit.unit_pos() as usize],
                init,
                &storage,
                I::apply,
            )
        });
        for (pos, (output, reduction)) in outputs.into_iter().enumerate() {
            assert_eq!(output, expected_exclusive[pos]);
            assert_eq!(reduction, expected_reduction);
        }

        let storage = ScanStorage::<N, PLANE_DIM>::new();
        let outputs = L::launch(|unit| {
            plane_scan(
                unit,
                inputs[unit.unit_pos() as usize],
                init,
                &storage,
                I::apply,
            )
        });
        for (pos, (inclusive, exclusive)) in outputs.into_iter().enumerate() {
            assert_eq!(inclusive, expected_inclusive[pos]);
            assert_eq!(exclusive, expected_exclusive[pos]);
        }

        let storage = ScanStorage::<N, PLANE_DIM>::new();
        let outputs = L::launch(|unit| {
            plane_scan_reduce(
                unit,
                inputs[unit.unit_pos() as usize],
                init,
                &storage,
                I::apply,
            )
        });
        for (pos, (inclusive, exclusive, reduction)) in outputs.into_iter().enumerate() {
            assert_eq!(inclusive, expected_inclusive[pos]);
            assert_eq!(exclusive, expected_exclusive[pos]);
            assert_eq!(reduction, expected_reduction);
        }
    }

    fn generate_inputs<N, const PLANE_DIM: usize>(&self) -> [N; PLANE_DIM]
    where
        N: Copy + FromPrimitive,
    {
        let values: Vec<i64> = StdRng::seed_from_u64(self.seed)
            .sample_iter(Uniform::new(1i64, 20).unwrap())
            .take(PLANE_DIM)
            .collect();
        core::array::from_fn(|pos| N::from_i64(values[pos]).unwrap())
    }
}

fn reference_inclusive<N: Copy, I: ScanInstruction<N>>(inputs: &[N]) -> Vec<N> {
    inputs
        .iter()
        .scan(None, |state: &mut Option<N>, item| {
            let folded = match *state {
                Some(acc) => I::apply(acc, *item),
                None => *item,
            };
            *state = Some(folded);
            Some(folded)
        })
        .collect()
}

fn reference_exclusive<N: Copy, I: ScanInstruction<N>>(init: N, inclusive: &[N]) -> Vec<N> {
    (0..inclusive.len())
        .map(|pos| {
            if pos == 0 {
                init
            } else {
                I::apply(init, inclusive[pos - 1])
            }
        })
        .collect()
}
