use rayon::prelude::*;
use sequential_pattern::{Brackets, Item, Itemset, SequenceId, SequenceIds, SequentialPattern};

const DATA: &[&[&[Item]]] = &[
    &[&[1], &[1, 2, 3], &[1, 3], &[4], &[3, 6]],
    &[&[1, 4], &[3], &[2, 3], &[1, 5]],
    &[&[5, 6], &[1, 2], &[4, 6], &[3], &[2]],
    &[&[5], &[7], &[1, 6], &[3], &[2], &[3]],
];

const MIN_SUP: usize = 3;
const ITEMS: &[Item] = &[1, 2, 3, 4, 5, 6, 7];

type Database = Vec<Vec<Itemset>>;

fn contains(sequence: &[Itemset], pattern: &SequentialPattern) -> bool {
    let mut events = sequence.iter();
    pattern.iter().all(|itemset| {
        events
            .by_ref()
            .any(|event| itemset.iter().all(|item| event.contains(item)))
    })
}

fn support(database: &Database, pattern: &SequentialPattern) -> SequenceIds {
    let ids: Vec<SequenceId> = database
        .par_iter()
        .enumerate()
        .filter(|(_, sequence)| contains(sequence, pattern))
        .map(|(sid, _)| sid)
        .collect();
    ids.into_iter().collect()
}

/// Grow `prefix` by one itemset at a time, keeping frequent extensions.
fn grow(database: &Database, prefix: &SequentialPattern, found: &mut Vec<SequentialPattern>) {
    for &item in ITEMS {
        let mut candidate = prefix.clone_sequence();
        candidate.add_itemset(std::iter::once(item).collect());
        let ids = support(database, &candidate);
        if ids.len() < MIN_SUP {
            continue;
        }
        candidate.set_sequence_ids(ids);
        grow(database, &candidate, found);
        found.push(candidate);
    }
}

fn main() {
    env_logger::init();

    let database: Database = DATA
        .iter()
        .map(|sequence| {
            sequence
                .iter()
                .map(|items| items.iter().copied().collect::<Itemset>())
                .collect::<Vec<_>>()
        })
        .collect();

    let mut found = Vec::new();
    grow(&database, &SequentialPattern::new(), &mut found);

    for pattern in &found {
        match (
            pattern.absolute_support(),
            pattern.relative_support_formatted(database.len()),
        ) {
            (Ok(absolute), Ok(relative)) => println!(
                "{} #SUP: {} ({})",
                pattern.display(Brackets::Braces).with_sequence_ids(),
                absolute,
                relative
            ),
            (Err(e), _) | (_, Err(e)) => eprintln!("{}: {}", pattern, e),
        }
    }
}
