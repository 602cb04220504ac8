use narwhal::{Axis, NodeLabel, RankDir};

fn node() -> NodeLabel {
    NodeLabel::new(0, 0).with_size(100.0, 200.0)
}

#[test]
fn vertical_rank_dirs_keep_width_along_ranks() {
    for rank_dir in [RankDir::TB, RankDir::BT] {
        let axis = Axis::from_rank_dir(rank_dir);
        assert_eq!(axis.rank_dir(), rank_dir);
        assert_eq!(axis.extent(&node()), 100.0);
        assert_eq!(axis.depth(&node()), 200.0);
    }
}

#[test]
fn horizontal_rank_dirs_swap_width_and_height() {
    for rank_dir in [RankDir::LR, RankDir::RL] {
        let axis = Axis::from_rank_dir(rank_dir);
        assert_eq!(axis.extent(&node()), 200.0);
        assert_eq!(axis.depth(&node()), 100.0);
    }
}

#[test]
fn place_writes_along_to_x_for_vertical_layouts() {
    let axis = Axis::from_rank_dir(RankDir::TB);
    let mut n = node();
    axis.place(&mut n, 5.0, 7.0);
    assert_eq!((n.x, n.y), (Some(5.0), Some(7.0)));
    assert_eq!(axis.along(&n), Some(5.0));
    assert_eq!(axis.across(&n), Some(7.0));
}

#[test]
fn place_writes_along_to_y_for_horizontal_layouts() {
    let axis = Axis::from_rank_dir(RankDir::LR);
    let mut n = node();
    axis.place(&mut n, 5.0, 7.0);
    assert_eq!((n.x, n.y), (Some(7.0), Some(5.0)));
    assert_eq!(axis.along(&n), Some(5.0));
    assert_eq!(axis.across(&n), Some(7.0));
}

#[test]
fn along_and_across_are_none_before_placement() {
    let axis = Axis::from_rank_dir(RankDir::RL);
    assert_eq!(axis.along(&node()), None);
    assert_eq!(axis.across(&node()), None);
}

#[test]
fn only_bottom_to_top_and_right_to_left_reverse_ranks() {
    assert!(!Axis::from_rank_dir(RankDir::TB).reverses_ranks());
    assert!(Axis::from_rank_dir(RankDir::BT).reverses_ranks());
    assert!(!Axis::from_rank_dir(RankDir::LR).reverses_ranks());
    assert!(Axis::from_rank_dir(RankDir::RL).reverses_ranks());
}
