//! Unit tests for the identity policy
//!
//! Tests cover the unassigned sentinel and next-id assignment as seen by
//! repositories that compute ids from the ids they hold.

use core_kernel::{is_assigned, next_id, EntityId, UNASSIGNED_ID};

mod assignment_tests {
    use super::*;

    #[test]
    fn test_sentinel_is_unassigned() {
        assert!(!is_assigned(UNASSIGNED_ID));
        assert!(!is_assigned(EntityId::MIN));
    }

    #[test]
    fn test_zero_is_assigned() {
        assert!(is_assigned(0));
    }
}

mod next_id_tests {
    use super::*;

    #[test]
    fn test_empty_store_starts_at_one() {
        assert_eq!(next_id(None), 1);
    }

    #[test]
    fn test_follows_max_id() {
        assert_eq!(next_id(Some(3)), 4);
        assert_eq!(next_id(vec![2, 9, 5]), 10);
    }

    #[test]
    fn test_zero_only_store() {
        assert_eq!(next_id([0]), 1);
    }

    #[test]
    fn test_gaps_are_not_reused() {
        // ids 1 and 2 were deleted
        assert_eq!(next_id([3]), 4);
    }
}
