//! Scene rendering by ray casting one ray per terminal cell.
//!
//! Drawing goes through the same camera and pick path as mouse clicks, so
//! every cell that shows a tile is a cell that selects that tile.

use super::app::{App, viewport};
use galo_core::Coord;
use galo_scene::{Node, NodeKind, Presenter, Vec3};
use ratatui::{
    Frame,
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Share of a tile's half-width drawn as its face; the rest is the edge.
const EDGE: f32 = 0.85;

/// Draws the whole UI.
pub fn draw(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(5),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(f.area());

    let block = Block::default().borders(Borders::ALL).title(" galo ");
    let scene_area = block.inner(chunks[0]);
    f.render_widget(block, chunks[0]);
    app.set_scene_area(scene_area);

    f.render_widget(
        SceneView {
            presenter: app.presenter(),
            highlight: app.highlighted(),
        },
        scene_area,
    );

    let status = Paragraph::new(app.status_message().to_string())
        .style(Style::default().add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    f.render_widget(status, chunks[1]);

    let help = Paragraph::new("click a tile or press 1-9 · r: restart · q: quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    f.render_widget(help, chunks[2]);
}

/// Ray-cast view of the presenter's scene.
struct SceneView<'a> {
    presenter: &'a Presenter,
    highlight: Option<[Coord; 3]>,
}

impl Widget for SceneView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let viewport = viewport(area);
        let camera = self.presenter.camera();
        let scene = self.presenter.scene();

        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                let hit = viewport
                    .to_ndc(x as f32 + 0.5, y as f32 + 0.5)
                    .and_then(|ndc| camera.ray_from_ndc(ndc))
                    .and_then(|ray| {
                        scene
                            .pick(&ray)
                            .map(|hit| (hit.node, ray.at(hit.distance)))
                    });
                let Some((node, point)) = hit else {
                    continue;
                };

                let highlighted = self
                    .highlight
                    .zip(scene.coord_of(node))
                    .is_some_and(|(line, coord)| line.contains(&coord));
                let (symbol, style) = appearance(node, point, highlighted);
                if let Some(cell) = buf.cell_mut((x, y)) {
                    cell.set_symbol(symbol).set_style(style);
                }
            }
        }
    }
}

fn appearance(node: &Node, point: Vec3, highlighted: bool) -> (&'static str, Style) {
    let color = rgb(node.color(), node.opacity());
    match node.kind() {
        NodeKind::Mark(_) if highlighted => (
            "▓",
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ),
        NodeKind::Mark(_) => ("█", Style::default().fg(color)),
        NodeKind::Tile => {
            let local = point - node.position();
            let half = node.size() * 0.5;
            let on_edge = local.x.abs() > half.x * EDGE || local.y.abs() > half.y * EDGE;
            if on_edge {
                ("░", Style::default().fg(Color::DarkGray))
            } else {
                ("▒", Style::default().fg(color))
            }
        }
    }
}

/// `0xRRGGBB` faded towards black by `opacity`.
fn rgb(color: u32, opacity: f32) -> Color {
    let channel = |shift: u32| (((color >> shift) & 0xff) as f32 * opacity.clamp(0.0, 1.0)) as u8;
    Color::Rgb(channel(16), channel(8), channel(0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use galo_scene::SceneConfig;

    #[test]
    fn test_rgb_applies_opacity() {
        assert_eq!(rgb(0xff0000, 1.0), Color::Rgb(255, 0, 0));
        assert_eq!(rgb(0xdddddd, 0.5), Color::Rgb(110, 110, 110));
    }

    #[test]
    fn test_scene_view_draws_board_and_marks() {
        let mut app = App::new(&SceneConfig::default());
        let area = Rect::new(0, 0, 60, 20);
        app.set_scene_area(area);
        app.click(30, 10);

        let mut buf = Buffer::empty(area);
        SceneView {
            presenter: app.presenter(),
            highlight: None,
        }
        .render(area, &mut buf);

        assert_eq!(buf[(30, 10)].symbol(), "█");
        assert_eq!(buf[(0, 0)].symbol(), " ");
        let tiles = buf.content().iter().filter(|c| c.symbol() == "▒").count();
        assert!(tiles > 0);
    }
}
