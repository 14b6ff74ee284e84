use crate::layout::state::Divider;

/// Horizontal span a divider drag is measured against, in screen points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragRegion {
    pub left: f32,
    pub width: f32,
}

/// One pointer-down .. pointer-up resize gesture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    pub divider: Divider,
    pub region: DragRegion,
    last_fraction: Option<f32>,
}

impl DragSession {
    pub fn new(divider: Divider, region: DragRegion) -> Self {
        Self {
            divider,
            region,
            last_fraction: None,
        }
    }

    /// Raw, unclamped fraction for a pointer position. NaN for a degenerate region.
    ///
    /// Primary measures the left panel's share from the region's left edge;
    /// Secondary measures the right panel's share from the region's right edge.
    pub fn fraction_at(&self, pointer_x: f32) -> f32 {
        let DragRegion { left, width } = self.region;
        if !(width.is_finite() && width > 0.0) || !pointer_x.is_finite() {
            return f32::NAN;
        }
        match self.divider {
            Divider::Primary => (pointer_x - left) / width,
            Divider::Secondary => (left + width - pointer_x) / width,
        }
    }

    pub(crate) fn record(&mut self, fraction: f32) {
        self.last_fraction = Some(fraction);
    }

    pub fn last_fraction(&self) -> Option<f32> {
        self.last_fraction
    }
}
