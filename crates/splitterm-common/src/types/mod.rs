mod geometry;
mod surface;

pub use geometry::*;
pub use surface::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_size_display() {
        assert_eq!(GridSize::new(80, 24).to_string(), "80x24");
    }

    #[test]
    fn grid_size_clamps_to_one() {
        let g = GridSize::new(0, 0);
        assert_eq!(g, GridSize::new(1, 1));
    }

    #[test]
    fn grid_size_serialization() {
        let g = GridSize::new(120, 40);
        let json = serde_json::to_string(&g).unwrap();
        assert_eq!(json, r#"{"cols":120,"rows":40}"#);
        let back: GridSize = serde_json::from_str(&json).unwrap();
        assert_eq!(back, g);
    }

    #[test]
    fn surface_id_display_and_eq() {
        let a = SurfaceId::new("pane-a");
        assert_eq!(a.to_string(), "pane-a");
        assert_eq!(a.as_str(), "pane-a");
        assert_eq!(a, SurfaceId::from("pane-a"));
        assert_ne!(a, SurfaceId::new("pane-b"));
    }

    #[test]
    fn pixel_bounds_are_plain_values() {
        let px = PixelBounds {
            width: 800.0,
            height: 600.0,
        };
        let copy = px;
        assert_eq!(px, copy);
    }
}
