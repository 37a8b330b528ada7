//! Min/max calorie estimation for a combo.
//!
//! Each group is filled greedily twice: once from its least caloric option
//! upwards for the minimum, once from its most caloric option downwards for
//! the maximum. An option is skipped when the units still to place are fewer
//! than its `min_amount`; otherwise it takes as many units as its
//! `max_amount` allows. Group subtotals add up to the combo total.
//!
//! A group whose requirement cannot be met this way yields a *partial*
//! allocation: the leftover units are reported in [`Allocation::unfilled`]
//! and simply contribute nothing. No error is raised.

use super::models::{CalorieRange, Combo, ComboGroup, ComboItemOption};

/// Units given to one option.
#[derive(Debug, Clone, PartialEq)]
pub struct Pick {
    pub name: String,
    pub amount: u32,
    pub calories: f64,
}

/// Outcome of one greedy walk over a group.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Allocation {
    /// Calorie subtotal of all picks
    pub calories: f64,
    pub picks: Vec<Pick>,
    /// Required units no option could absorb
    pub unfilled: u32,
}

impl Allocation {
    /// True when the group's requirement was only partly satisfied.
    pub fn is_partial(&self) -> bool {
        self.unfilled > 0
    }

    pub fn selected(&self) -> u32 {
        self.picks.iter().map(|p| p.amount).sum()
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct GroupEstimate {
    pub min: Allocation,
    pub max: Allocation,
}

fn allocate<'a, I>(required: u32, options: I) -> Allocation
where
    I: IntoIterator<Item = &'a ComboItemOption>,
{
    let mut remaining = required;
    let mut allocation = Allocation::default();

    for option in options {
        if remaining == 0 {
            break;
        }
        if remaining < option.min_amount {
            continue;
        }

        let amount = remaining.min(option.max_amount);
        if amount > 0 {
            allocation.calories += f64::from(amount) * option.calories;
            allocation.picks.push(Pick {
                name: option.name.clone(),
                amount,
                calories: option.calories,
            });
            remaining -= amount;
        }
    }

    allocation.unfilled = remaining;
    allocation
}

/// Computes the minimum and maximum allocation for one group.
pub fn estimate_group(group: &ComboGroup) -> GroupEstimate {
    let mut ascending: Vec<&ComboItemOption> = group.options.iter().collect();
    // `sort_by` is stable, so equal-calorie options keep their source order.
    ascending.sort_by(|a, b| a.calories.total_cmp(&b.calories));

    GroupEstimate {
        min: allocate(group.amount_required_to_select, ascending.iter().copied()),
        max: allocate(
            group.amount_required_to_select,
            ascending.iter().rev().copied(),
        ),
    }
}

/// Sums the per-group minimum and maximum over the whole combo.
pub fn estimate_calories(combo: &Combo) -> CalorieRange {
    combo
        .groups
        .iter()
        .fold(CalorieRange::default(), |mut range, group| {
            let estimate = estimate_group(group);
            log_estimate(group, &estimate);

            range.min_calories += estimate.min.calories;
            range.max_calories += estimate.max.calories;
            range
        })
}

fn log_estimate(group: &ComboGroup, estimate: &GroupEstimate) {
    for (direction, allocation) in [("min", &estimate.min), ("max", &estimate.max)] {
        for pick in &allocation.picks {
            tracing::debug!(
                "{} {}: {}x {} ({} cal)",
                group.name,
                direction,
                pick.amount,
                pick.name,
                pick.calories
            );
        }
        if allocation.is_partial() {
            tracing::warn!(
                "Group {:?} cannot place {} of {} required selection(s) for the {} estimate",
                group.name,
                allocation.unfilled,
                group.amount_required_to_select,
                direction
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn option(name: &str, calories: f64, min_amount: u32, max_amount: u32) -> ComboItemOption {
        ComboItemOption {
            name: name.to_string(),
            calories,
            min_amount,
            max_amount,
        }
    }

    fn group(required: u32, options: Vec<ComboItemOption>) -> ComboGroup {
        ComboGroup {
            name: "group".to_string(),
            amount_required_to_select: required,
            options,
        }
    }

    #[test]
    fn picks_cheapest_and_priciest_single_option() {
        let estimate = estimate_group(&group(
            1,
            vec![option("a", 100.0, 0, 1), option("b", 300.0, 0, 1)],
        ));
        assert_eq!(estimate.min.calories, 100.0);
        assert_eq!(estimate.max.calories, 300.0);
    }

    #[test]
    fn forced_option_is_the_only_choice() {
        let estimate = estimate_group(&group(
            1,
            vec![
                option("side", 50.0, 0, 0),
                option("drumstick", 200.0, 1, 1),
                option("cole slaw", 500.0, 0, 0),
            ],
        ));
        assert_eq!(estimate.min.calories, 200.0);
        assert_eq!(estimate.max.calories, 200.0);
    }

    #[test]
    fn fills_up_to_max_amount_before_moving_on() {
        let estimate = estimate_group(&group(
            4,
            vec![
                option("wing", 100.0, 0, 2),
                option("thigh", 300.0, 0, 4),
                option("breast", 400.0, 0, 1),
            ],
        ));
        // 2 wings + 2 thighs
        assert_eq!(estimate.min.calories, 800.0);
        // 1 breast + 3 thighs
        assert_eq!(estimate.max.calories, 1300.0);
        assert_eq!(estimate.min.selected(), 4);
        assert_eq!(estimate.max.selected(), 4);
    }

    #[test]
    fn zero_requirement_contributes_nothing() {
        let estimate = estimate_group(&group(
            0,
            vec![option("a", 100.0, 1, 1), option("b", 900.0, 0, 3)],
        ));
        assert_eq!(estimate.min, Allocation::default());
        assert_eq!(estimate.max, Allocation::default());
    }

    #[test]
    fn empty_group_contributes_nothing() {
        let estimate = estimate_group(&group(3, Vec::new()));
        assert_eq!(estimate.min.calories, 0.0);
        assert_eq!(estimate.max.calories, 0.0);
        assert_eq!(estimate.min.unfilled, 3);
    }

    #[test]
    fn option_with_unmet_minimum_is_skipped() {
        let estimate = estimate_group(&group(
            2,
            vec![option("single", 100.0, 0, 1), option("bucket", 50.0, 3, 6)],
        ));
        assert_eq!(estimate.min.calories, 100.0);
        assert_eq!(estimate.max.calories, 100.0);
        assert!(estimate.min.is_partial());
        assert_eq!(estimate.min.unfilled, 1);
    }

    #[test]
    fn infeasible_group_yields_partial_allocation() {
        let estimate = estimate_group(&group(5, vec![option("ten pack", 80.0, 10, 10)]));
        assert_eq!(estimate.min.calories, 0.0);
        assert_eq!(estimate.max.calories, 0.0);
        assert!(estimate.min.is_partial());
        assert!(estimate.max.is_partial());
        assert_eq!(estimate.max.unfilled, 5);
    }

    #[test]
    fn tied_options_share_the_requirement() {
        let estimate = estimate_group(&group(
            3,
            vec![
                option("original", 250.0, 0, 2),
                option("spicy", 250.0, 0, 2),
            ],
        ));
        assert_eq!(estimate.min.selected(), 3);
        assert_eq!(estimate.max.selected(), 3);
        assert_eq!(estimate.min.calories, 750.0);
        assert_eq!(estimate.max.calories, 750.0);
        // ascending keeps source order, descending reverses it
        assert_eq!(estimate.min.picks[0].name, "original");
        assert_eq!(estimate.max.picks[0].name, "spicy");
    }

    #[test]
    fn groups_add_up() {
        let chicken = group(
            4,
            vec![option("leg", 160.0, 0, 4), option("breast", 380.0, 0, 2)],
        );
        let side = group(
            1,
            vec![option("green beans", 50.0, 0, 1), option("fries", 260.0, 0, 1)],
        );
        let biscuit = group(1, vec![option("biscuit", 210.0, 1, 1)]);

        let combo = Combo {
            groups: vec![chicken.clone(), side.clone(), biscuit.clone()],
        };
        let range = estimate_calories(&combo);

        let parts: Vec<GroupEstimate> = [chicken, side, biscuit].iter().map(estimate_group).collect();
        let min: f64 = parts.iter().map(|p| p.min.calories).sum();
        let max: f64 = parts.iter().map(|p| p.max.calories).sum();

        assert_eq!(range.min_calories, min);
        assert_eq!(range.max_calories, max);
        assert_eq!(range.min_calories, 640.0 + 50.0 + 210.0);
        assert_eq!(range.max_calories, 760.0 + 320.0 + 260.0 + 210.0);
    }

    #[test]
    fn empty_combo_is_zero() {
        assert_eq!(estimate_calories(&Combo::default()), CalorieRange::default());
    }
}
