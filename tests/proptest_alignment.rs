//! Property-based tests for the alignment engine.
//!
//! Verifies the metric-style properties of unit-cost edit distance and,
//! for arbitrary positive cost policies, cross-validates the search
//! against a straightforward dynamic-programming reference.

use proptest::prelude::*;
use seqalign::prelude::*;
use seqalign::script::EditOp;

fn chars(s: &str) -> Vec<char> {
    s.chars().collect()
}

fn arb_string() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-d]{0,16}").unwrap()
}

/// Per-operation prices for the reference policy; strictly positive on
/// non-equal pairs.
#[derive(Debug, Clone, Copy)]
struct WeightedCost {
    ins: u32,
    del: u32,
    sub: u32,
}

impl CostPolicy<char> for WeightedCost {
    type Cost = u32;

    fn cost_ins(&self, _b: &char) -> u32 {
        self.ins
    }

    fn cost_del(&self, _a: &char) -> u32 {
        self.del
    }

    fn cost_sub(&self, a: &char, b: &char) -> u32 {
        if a == b {
            0
        } else {
            self.sub
        }
    }
}

fn arb_weights() -> impl Strategy<Value = WeightedCost> {
    (1..4u32, 1..4u32, 1..5u32).prop_map(|(ins, del, sub)| WeightedCost { ins, del, sub })
}

/// Textbook full-matrix reference, O(len1 · len2).
fn dp_distance(a: &[char], b: &[char], w: WeightedCost, allow_sub: bool) -> u32 {
    let m = a.len();
    let n = b.len();
    let inf = u32::MAX / 2;

    let mut dp = vec![vec![0u32; n + 1]; m + 1];
    for (i, row) in dp.iter_mut().enumerate() {
        row[0] = i as u32 * w.del;
    }
    for j in 0..=n {
        dp[0][j] = j as u32 * w.ins;
    }

    for i in 1..=m {
        for j in 1..=n {
            let diag = if a[i - 1] == b[j - 1] {
                dp[i - 1][j - 1]
            } else if allow_sub {
                dp[i - 1][j - 1] + w.sub
            } else {
                inf
            };
            dp[i][j] = diag
                .min(dp[i - 1][j] + w.del)
                .min(dp[i][j - 1] + w.ins);
        }
    }
    dp[m][n]
}

/// Replay a script, returning the rebuilt target (panics if the script
/// does not consume its source correctly).
fn apply_script(source: &[char], ops: &[EditOp<char, char, u32>]) -> Vec<char> {
    let mut i = 0;
    let mut out = Vec::new();
    for op in ops {
        match op {
            EditOp::Eql(a, b) => {
                assert_eq!(source[i], *a);
                i += 1;
                out.push(*b);
            }
            EditOp::Ins(b, _) => out.push(*b),
            EditOp::Del(a, _) => {
                assert_eq!(source[i], *a);
                i += 1;
            }
            EditOp::Sub(a, b, _) => {
                assert_eq!(source[i], *a);
                i += 1;
                out.push(*b);
            }
        }
    }
    assert_eq!(i, source.len());
    out
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(512))]

    #[test]
    fn identity_distance_is_zero(a in arb_string()) {
        let a = chars(&a);
        let config = AlignConfig::new().allow_sub(true);
        prop_assert_eq!(edit_distance(&a, &a, &UnitCost, &config), Ok(0));
    }

    #[test]
    fn identity_script_is_all_equal(a in arb_string()) {
        let a = chars(&a);
        let mut sink = ScriptSink::new();
        let total =
            edit_alignment(&a, &a, &mut sink, &UnitCost, &AlignConfig::new()).unwrap();
        prop_assert_eq!(total, 0);
        prop_assert!(sink
            .ops()
            .iter()
            .all(|op| matches!(op, EditOp::Eql(_, _))));
    }

    #[test]
    fn swap_symmetry_with_swapped_costs(
        a in arb_string(),
        b in arb_string(),
        w in arb_weights()
    ) {
        let (a, b) = (chars(&a), chars(&b));
        let config = AlignConfig::new().allow_sub(true);
        let swapped = WeightedCost { ins: w.del, del: w.ins, sub: w.sub };

        prop_assert_eq!(
            edit_distance(&a, &b, &w, &config).unwrap(),
            edit_distance(&b, &a, &swapped, &config).unwrap()
        );
    }

    #[test]
    fn triangle_inequality_with_unit_costs(
        a in arb_string(),
        b in arb_string(),
        c in arb_string()
    ) {
        let (a, b, c) = (chars(&a), chars(&b), chars(&c));
        let config = AlignConfig::new().allow_sub(true);

        let d_ac = edit_distance(&a, &c, &UnitCost, &config).unwrap();
        let d_ab = edit_distance(&a, &b, &UnitCost, &config).unwrap();
        let d_bc = edit_distance(&b, &c, &UnitCost, &config).unwrap();

        prop_assert!(d_ac <= d_ab + d_bc);
    }

    #[test]
    fn empty_source_costs_sum_of_insertions(b in arb_string(), w in arb_weights()) {
        let b = chars(&b);
        let config = AlignConfig::new();
        prop_assert_eq!(
            edit_distance(&[], &b, &w, &config).unwrap(),
            b.len() as u32 * w.ins
        );
    }

    #[test]
    fn empty_target_costs_sum_of_deletions(a in arb_string(), w in arb_weights()) {
        let a = chars(&a);
        let config = AlignConfig::new();
        prop_assert_eq!(
            edit_distance(&a, &[], &w, &config).unwrap(),
            a.len() as u32 * w.del
        );
    }

    #[test]
    fn matches_dp_reference(
        a in arb_string(),
        b in arb_string(),
        w in arb_weights(),
        allow_sub in any::<bool>()
    ) {
        let (a, b) = (chars(&a), chars(&b));
        let config = AlignConfig::new().allow_sub(allow_sub);

        prop_assert_eq!(
            edit_distance(&a, &b, &w, &config).unwrap(),
            dp_distance(&a, &b, w, allow_sub)
        );
    }

    #[test]
    fn script_transforms_source_into_target(
        a in arb_string(),
        b in arb_string(),
        w in arb_weights(),
        allow_sub in any::<bool>()
    ) {
        let (a, b) = (chars(&a), chars(&b));
        let config = AlignConfig::new().allow_sub(allow_sub);

        let mut sink = ScriptSink::new();
        edit_alignment(&a, &b, &mut sink, &w, &config).unwrap();

        prop_assert_eq!(apply_script(&a, sink.ops()), b);
    }

    #[test]
    fn script_costs_sum_to_the_total(
        a in arb_string(),
        b in arb_string(),
        w in arb_weights(),
        allow_sub in any::<bool>()
    ) {
        let (a, b) = (chars(&a), chars(&b));
        let config = AlignConfig::new().allow_sub(allow_sub);

        let mut sink = ScriptSink::new();
        let total = edit_alignment(&a, &b, &mut sink, &w, &config).unwrap();

        prop_assert_eq!(
            sink.ops().iter().map(|op| op.cost()).sum::<u32>(),
            total
        );
    }

    #[test]
    fn wide_beam_never_changes_the_answer(a in arb_string(), b in arb_string()) {
        let (a, b) = (chars(&a), chars(&b));
        let width = a.len().max(b.len());

        let unbounded = AlignConfig::new().allow_sub(true);
        let banded = AlignConfig::new().allow_sub(true).edit_beam(width);

        prop_assert_eq!(
            edit_distance(&a, &b, &UnitCost, &unbounded).unwrap(),
            edit_distance(&a, &b, &UnitCost, &banded).unwrap()
        );
    }
}
