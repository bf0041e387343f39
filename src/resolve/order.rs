//! Category ordering for whole-scope resolution.

/// Order `categories` for concatenation.
///
/// Categories missing from `sort_order` come first, in their original
/// (discovery) order. Listed categories follow, in the order `sort_order`
/// gives them. The sort is stable, so ties keep discovery order.
pub fn order_categories<'a, I>(categories: I, sort_order: &[String]) -> Vec<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut keyed: Vec<(Option<usize>, &'a str)> = categories
        .into_iter()
        .map(|category| {
            let rank = sort_order.iter().position(|listed| listed == category);
            (rank, category)
        })
        .collect();
    // `None` (unlisted) sorts before any `Some(rank)`
    keyed.sort_by_key(|(rank, _)| *rank);
    keyed.into_iter().map(|(_, category)| category).collect()
}
