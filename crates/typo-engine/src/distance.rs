// Typo distance: cheapest weighted edit script from one string to another.

use typo_core::TypoError;

use crate::cost::CostModel;

/// Minimum total cost of turning `source` into `target`.
///
/// `d[i][j]` is the cheapest way to turn the first `i` characters of
/// `source` into the first `j` characters of `target`. Column 0 is a run of
/// deletions. Row 0 inserts `target`'s prefix in front of `source`, costed
/// with the same insertion rule as every other cell (before `source[0]`).
///
/// A match carries the diagonal over at no cost; the deletion and insertion
/// routes are still considered for that cell.
///
/// Key lookups happen while the grid is filled, column by column, so an
/// unsupported character is reported when the first cell needing it is
/// reached.
#[allow(clippy::needless_range_loop)]
pub fn typo_distance(model: &CostModel<'_>, source: &[char], target: &[char]) -> Result<f64, TypoError> {
    let rows = source.len() + 1;
    let cols = target.len() + 1;
    let mut d = vec![vec![0.0f64; cols]; rows];

    for i in 1..rows {
        d[i][0] = d[i - 1][0] + model.deletion_cost(source, i - 1);
    }
    for j in 1..cols {
        d[0][j] = d[0][j - 1] + model.insertion_cost(source, 0, target[j - 1])?;
    }

    for j in 1..cols {
        let wanted = target[j - 1];
        for i in 1..rows {
            let delete = d[i - 1][j] + model.deletion_cost(source, i - 1);
            let insert = d[i][j - 1] + model.insertion_cost(source, i, wanted)?;
            let diagonal = if source[i - 1] == wanted {
                d[i - 1][j - 1]
            } else {
                d[i - 1][j - 1] + model.substitution_cost(source, i - 1, wanted)?
            };
            d[i][j] = delete.min(insert).min(diagonal);
        }
    }

    Ok(d[rows - 1][cols - 1])
}
