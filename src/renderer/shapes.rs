//! Shape generation for 2D primitives

use glam::Vec2;
use std::f32::consts::TAU;

use super::vertex::Vertex;
use crate::sim::Color;

/// Filled disc as a triangle fan, one triangle per segment
pub fn circle(center: Vec2, radius: f32, color: Color, segments: u32) -> Vec<Vertex> {
    let rgba = color.to_rgba();
    let rim = |i: u32| center + crate::direction(i as f32 / segments as f32 * TAU) * radius;

    (0..segments)
        .flat_map(|i| [center, rim(i), rim(i + 1)])
        .map(|p| Vertex::new(p.x, p.y, rgba))
        .collect()
}

/// Generate vertices for a straight stroke of the given width (two triangles).
///
/// A zero-length line yields no vertices.
pub fn line(from: Vec2, to: Vec2, width: f32, color: Color) -> Vec<Vertex> {
    let dir = (to - from).normalize_or_zero();
    if dir == Vec2::ZERO {
        return Vec::new();
    }
    let perp = dir.perp() * (width / 2.0);
    let rgba = color.to_rgba();

    let a1 = from + perp;
    let a2 = from - perp;
    let b1 = to + perp;
    let b2 = to - perp;

    [a1, a2, b1, b1, a2, b2]
        .into_iter()
        .map(|p| Vertex::new(p.x, p.y, rgba))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::sim::body::colors;

    const WHITE: Color = colors::CUE;

    #[test]
    fn test_circle_fan() {
        let verts = circle(Vec2::new(10.0, 10.0), 5.0, WHITE, 8);
        assert_eq!(verts.len(), 24);
        for tri in verts.chunks(3) {
            assert_eq!(tri[0].position, [10.0, 10.0]);
            assert_eq!(tri[0].color, [1.0; 4]);
            for v in &tri[1..] {
                let p = Vec2::from(v.position);
                assert!((p.distance(Vec2::new(10.0, 10.0)) - 5.0).abs() < 1e-4);
            }
        }
    }

    #[test]
    fn test_line_quad_width() {
        let verts = line(Vec2::ZERO, Vec2::new(10.0, 0.0), 2.0, WHITE);
        assert_eq!(verts.len(), 6);
        assert_eq!(verts[0].position, [0.0, 1.0]);
        assert_eq!(verts[1].position, [0.0, -1.0]);
        assert_eq!(verts[5].position, [10.0, -1.0]);
    }

    #[test]
    fn test_hue_color_converted() {
        let verts = circle(Vec2::ZERO, 1.0, Color::Hsla { hue: 120.0 }, 4);
        let [r, g, b, a] = verts[0].color;
        assert!(r.abs() < 1e-4 && (g - 1.0).abs() < 1e-4 && b.abs() < 1e-4);
        assert_eq!(a, 1.0);
    }

    #[test]
    fn test_degenerate_line_is_empty() {
        let p = Vec2::new(3.0, 3.0);
        assert!(line(p, p, 2.0, WHITE).is_empty());
    }
}
