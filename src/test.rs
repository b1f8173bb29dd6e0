use std::ops::Range;

use proptest::{prelude::prop, prop_assert, prop_assert_eq, prop_compose, proptest};
use rand::{rngs::SmallRng, seq::SliceRandom as _, SeedableRng as _};

use crate::{
    criteria::{topsis::closeness, Criterion, Direction},
    descending, top, Alternative, ArrayVec, Normalized,
};

#[derive(Clone, Debug)]
pub struct TestAlternative<const N: usize> {
    pub name: String,
    pub values: [f64; N],
}

impl<const N: usize> TestAlternative<N> {
    pub fn new(name: &str, values: [f64; N]) -> Self {
        Self {
            name: name.to_owned(),
            values,
        }
    }
}

impl<const N: usize> Alternative<N> for TestAlternative<N> {
    fn name(&self) -> &str {
        &self.name
    }
    fn values(&self) -> [f64; N] {
        self.values
    }
}

prop_compose! {
    pub fn normalized()(value in 0.0_f64..=1.0_f64) -> Normalized {
        Normalized::new(value).unwrap()
    }
}
prop_compose! {
    pub fn alternatives(range: Range<usize>)(
        rows in prop::collection::vec(prop::array::uniform4(0.0_f64..1000.0), range)
    ) -> Vec<TestAlternative<4>> {
        rows.into_iter()
            .enumerate()
            .map(|(id, values)| TestAlternative::new(&format!("alternative-{id}"), values))
            .collect()
    }
}
prop_compose! {
    pub fn criteria()(
        weights in prop::array::uniform4(0.0_f64..=1.0),
        maximize in prop::array::uniform4(prop::bool::ANY),
    ) -> [Criterion; 4] {
        const NAMES: [&str; 4] = ["a", "b", "c", "d"];
        std::array::from_fn(|j| {
            let direction = if maximize[j] { Direction::Maximize } else { Direction::Minimize };
            Criterion::new(NAMES[j], direction, weights[j]).unwrap()
        })
    }
}

#[test]
fn podium() {
    let ranked = ["first", "second", "third", "fourth"];
    let podium: ArrayVec<&&str, 3> = top(&ranked);
    assert_eq!(podium.as_slice(), &[&"first", &"second", &"third"]);

    let podium: ArrayVec<&&str, 3> = top(&ranked[..1]);
    assert_eq!(podium.len(), 1);

    let podium: ArrayVec<&&str, 3> = top(&[]);
    assert!(podium.is_empty());
}

proptest! {
    #[test]
    fn descending_is_stable(scores in prop::collection::vec(normalized(), 0..32)) {
        let order = descending(&scores);
        let indices: Vec<usize> = order.apply_slice((0..scores.len()).collect::<Vec<_>>());
        let sorted: Vec<Normalized> = order.apply_slice(&scores);
        for (window, ids) in sorted.windows(2).zip(indices.windows(2)) {
            prop_assert!(window[0] >= window[1]);
            if window[0] == window[1] {
                prop_assert!(ids[0] < ids[1]);
            }
        }
    }

    #[test]
    fn closeness_independent_of_input_order(
        seed: u64,
        alternatives in alternatives(1..16),
        criteria in criteria(),
    ) {
        let mut shuffled = alternatives.clone();
        shuffled.shuffle(&mut SmallRng::seed_from_u64(seed));

        let expected = closeness(&alternatives, &criteria).unwrap();
        let result = closeness(&shuffled, &criteria).unwrap();
        prop_assert_eq!(result.len(), expected.len());
        for (alternative, c) in shuffled.iter().zip(&result) {
            let position = alternatives.iter().position(|a| a.name == alternative.name).unwrap();
            let diff = (c.score.as_f64() - expected[position].score.as_f64()).abs();
            prop_assert!(diff < 1e-9);
        }
    }
}
