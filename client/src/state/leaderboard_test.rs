use super::*;

#[test]
fn rank_follows_input_order() {
    let entries = vec![
        LeaderboardEntry { employee_id: 2, average_rating: 3.0, ..LeaderboardEntry::default() },
        LeaderboardEntry { employee_id: 1, average_rating: 4.9, ..LeaderboardEntry::default() },
    ];
    let ranked = rank(entries);
    assert_eq!(ranked[0].rank, 1);
    assert_eq!(ranked[0].entry.employee_id, 2);
    assert_eq!(ranked[1].rank, 2);
}

#[test]
fn rating_has_two_decimals() {
    assert_eq!(format_rating(4.5), "4.50");
}
