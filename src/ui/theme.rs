//! Theme constants for the omok GUI

use egui::Color32;

// Board colors - warm wood tones
pub const BOARD_BG: Color32 = Color32::from_rgb(222, 184, 135); // Burlywood
pub const GRID_LINE: Color32 = Color32::from_rgb(60, 40, 20);
pub const STAR_POINT: Color32 = Color32::from_rgb(50, 35, 20);

// Stone colors
pub const BLACK_STONE: Color32 = Color32::from_rgb(25, 25, 30);
pub const BLACK_STONE_HIGHLIGHT: Color32 = Color32::from_rgb(70, 70, 80);
pub const WHITE_STONE: Color32 = Color32::from_rgb(250, 250, 252);
pub const WHITE_STONE_SHADOW: Color32 = Color32::from_rgb(190, 190, 195);

// Markers
pub const LAST_MOVE_MARKER: Color32 = Color32::from_rgb(230, 60, 60);
pub const WIN_HIGHLIGHT: Color32 = Color32::from_rgb(50, 220, 50);

pub fn hover_invalid() -> Color32 {
    Color32::from_rgba_unmultiplied(255, 50, 50, 100)
}

// Panel colors - dark theme
pub const PANEL_BG: Color32 = Color32::from_rgb(25, 27, 31);
pub const CARD_BG: Color32 = Color32::from_rgb(35, 38, 43);
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(240, 240, 245);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 165, 175);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 125, 135);
pub const STATUS_OK: Color32 = Color32::from_rgb(80, 200, 120);
pub const STATUS_WARN: Color32 = Color32::from_rgb(255, 180, 50);

// Sizes
pub const BOARD_MARGIN: f32 = 40.0;
pub const STONE_RADIUS_RATIO: f32 = 0.45;
pub const STAR_POINT_RADIUS: f32 = 4.0;
pub const GRID_LINE_WIDTH: f32 = 1.0;
pub const LAST_MOVE_MARKER_RADIUS: f32 = 5.0;

/// Star points (hoshi) for a board of `size`: the corners' inner points
/// and the center, plus edge midpoints on odd boards large enough for them.
pub fn star_points(size: usize) -> Vec<(usize, usize)> {
    if size < 7 {
        return vec![(size / 2, size / 2)];
    }
    let edge = if size >= 13 { 3 } else { 2 };
    let far = size - 1 - edge;
    let mid = size / 2;
    let lines: Vec<usize> = if size % 2 == 1 && size >= 13 {
        vec![edge, mid, far]
    } else {
        vec![edge, far]
    };

    let mut points: Vec<(usize, usize)> = lines
        .iter()
        .flat_map(|&r| lines.iter().map(move |&c| (r, c)))
        .collect();
    if !points.contains(&(mid, mid)) {
        points.push((mid, mid));
    }
    points
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_star_points_standard_boards() {
        let fifteen = star_points(15);
        assert_eq!(fifteen.len(), 9);
        assert!(fifteen.contains(&(3, 3)));
        assert!(fifteen.contains(&(7, 7)));
        assert!(fifteen.contains(&(11, 11)));

        let nineteen = star_points(19);
        assert_eq!(nineteen.len(), 9);
        assert!(nineteen.contains(&(15, 9)));
    }

    #[test]
    fn test_star_points_small_boards() {
        assert_eq!(star_points(5), vec![(2, 2)]);
        let nine = star_points(9);
        assert_eq!(nine.len(), 5);
        assert!(nine.contains(&(4, 4)));
        assert!(nine.iter().all(|&(r, c)| r < 9 && c < 9));
    }
}
