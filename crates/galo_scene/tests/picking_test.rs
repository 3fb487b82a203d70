//! End-to-end picking: pointer position to board cell.

use galo_core::{Coord, Player};
use galo_scene::{Presenter, SceneConfig, SceneEvent, Vec3, Viewport, tile_center};

fn tile_top(coord: Coord, config: &SceneConfig) -> Vec3 {
    let mut top = tile_center(coord, *config.square_size());
    top.z = *config.tile_depth() / 2.0;
    top
}

#[test]
fn test_every_tile_centre_picks_its_cell() {
    let config = SceneConfig::default();
    for aspect in [0.5, 1.0, 16.0 / 9.0] {
        let mut presenter = Presenter::new(&config, aspect);
        for coord in Coord::all() {
            let ndc = presenter
                .camera()
                .project(tile_top(coord, &config))
                .expect("Tile in front of camera");
            let events = presenter.click(ndc);
            match events.first() {
                Some(SceneEvent::MarkPlaced { row, col, .. }) => {
                    assert_eq!((*row, *col), (coord.row(), coord.col()), "aspect {aspect}");
                }
                other => panic!("Expected a mark at {coord}, got {other:?}"),
            }
            presenter.reset();
        }
    }
}

#[test]
fn test_clicking_a_mark_resolves_to_its_cell() {
    let config = SceneConfig::default();
    let mut presenter = Presenter::new(&config, 1.0);
    let coord = Coord::new(0, 2).unwrap();
    let ndc = presenter.camera().project(tile_top(coord, &config)).unwrap();

    presenter.click(ndc);
    let events = presenter.click(ndc);

    assert_eq!(events.len(), 1);
    match &events[0] {
        SceneEvent::Rejected { row, col, reason } => {
            assert_eq!((*row, *col), (0, 2));
            assert!(reason.contains("occupied"));
        }
        other => panic!("Expected rejection, got {other:?}"),
    }
    assert_eq!(presenter.game().current_player(), Player::O);
}

#[test]
fn test_pointer_through_viewport() {
    let config = SceneConfig::default();
    let viewport = Viewport::new(0.0, 0.0, 800.0, 600.0);
    let mut presenter = Presenter::new(&config, viewport.aspect().unwrap());

    let centre = viewport.to_ndc(400.0, 300.0).unwrap();
    let events = presenter.click(centre);
    assert!(matches!(
        events.as_slice(),
        [SceneEvent::MarkPlaced { row: 1, col: 1, player: Player::X, .. }]
    ));

    // Top-left corner of the window is well outside the board.
    let corner = viewport.to_ndc(1.0, 1.0).unwrap();
    assert!(matches!(presenter.click(corner).as_slice(), [SceneEvent::Missed { .. }]));
}

#[test]
fn test_winning_trace_by_clicks() {
    let config = SceneConfig::default();
    let mut presenter = Presenter::new(&config, 1.0);
    let mut last = Vec::new();
    for (row, col) in [(0, 0), (1, 1), (0, 1), (2, 2), (0, 2)] {
        let coord = Coord::new(row, col).unwrap();
        let ndc = presenter.camera().project(tile_top(coord, &config)).unwrap();
        last = presenter.click(ndc);
    }
    assert!(matches!(
        last.last(),
        Some(SceneEvent::WinnerAnnounced { player: Player::X, .. })
    ));
    assert_eq!(presenter.scene().marks().count(), 5);
}

#[test]
fn test_config_file_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("scene.toml");
    std::fs::write(&path, "square_size = 2.0\nmark_size = 1.6\n").unwrap();

    let config = SceneConfig::from_file(&path).unwrap();
    assert_eq!(*config.square_size(), 2.0);

    let missing = SceneConfig::from_file(dir.path().join("nope.toml")).unwrap_err();
    assert!(missing.message.contains("Failed to read config file"));
}
