/// Stable partition of a record sequence by an extracted key.
///
/// Keys appear in first-seen order, and every group keeps the original
/// relative order of its records. This is the one grouping primitive shared
/// by the chore board (by assignee) and anything else that buckets a
/// filtered list.
pub fn group_by<'a, T, K, F>(items: impl IntoIterator<Item = &'a T>, key: F) -> Vec<(K, Vec<&'a T>)>
where
    K: PartialEq,
    F: Fn(&T) -> K,
{
    let mut groups: Vec<(K, Vec<&'a T>)> = Vec::new();
    for item in items {
        let k = key(item);
        match groups.iter_mut().find(|(existing, _)| *existing == k) {
            Some((_, members)) => members.push(item),
            None => groups.push((k, vec![item])),
        }
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Chore {
        id: u32,
        assigned_to: &'static str,
    }

    #[test]
    fn groups_keep_relative_order() {
        let chores = [
            Chore { id: 1, assigned_to: "A" },
            Chore { id: 2, assigned_to: "B" },
            Chore { id: 3, assigned_to: "A" },
        ];

        let grouped = group_by(&chores, |c| c.assigned_to);
        assert_eq!(grouped.len(), 2);

        let (key, members) = &grouped[0];
        assert_eq!(*key, "A");
        assert_eq!(members.iter().map(|c| c.id).collect::<Vec<_>>(), vec![1, 3]);

        let (key, members) = &grouped[1];
        assert_eq!(*key, "B");
        assert_eq!(members.iter().map(|c| c.id).collect::<Vec<_>>(), vec![2]);
    }

    #[test]
    fn empty_input_yields_no_groups() {
        let grouped = group_by(&[] as &[Chore], |c| c.assigned_to);
        assert!(grouped.is_empty());
    }
}
