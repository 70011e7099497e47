//! Ordered layer stack composited with alpha-over.
//!
//! A render is expressed as a sequence of canvas-sized RGBA layers folded
//! onto a base canvas, rather than in-place mutation. That keeps the z-order
//! an inspectable data structure: tests can assert on layer names before the
//! fold flattens everything.

use image::{imageops, Rgba, RgbaImage};

/// One canvas-sized RGBA layer with a name for inspection.
#[derive(Debug, Clone)]
pub struct Layer {
    pub name: &'static str,
    pub image: RgbaImage,
}

impl Layer {
    /// Create a fully transparent layer.
    pub fn new(name: &'static str, width: u32, height: u32) -> Self {
        Self {
            name,
            image: RgbaImage::from_pixel(width, height, Rgba([0, 0, 0, 0])),
        }
    }
}

/// An ordered stack of layers; later layers paint over earlier ones.
#[derive(Debug)]
pub struct LayerStack {
    width: u32,
    height: u32,
    layers: Vec<Layer>,
}

impl LayerStack {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            layers: Vec::new(),
        }
    }

    /// Append an empty layer and return it for drawing.
    pub fn add(&mut self, name: &'static str) -> &mut Layer {
        self.layers.push(Layer::new(name, self.width, self.height));
        self.layers.last_mut().unwrap()
    }

    /// Append a pre-built layer. Dimensions must match the stack.
    pub fn push(&mut self, layer: Layer) {
        debug_assert_eq!(layer.image.dimensions(), (self.width, self.height));
        self.layers.push(layer);
    }

    /// Layer names in composition order.
    pub fn names(&self) -> Vec<&'static str> {
        self.layers.iter().map(|l| l.name).collect()
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// Fold every layer onto `base` with standard alpha-over compositing.
    pub fn composite(self, mut base: RgbaImage) -> RgbaImage {
        debug_assert_eq!(base.dimensions(), (self.width, self.height));
        for layer in &self.layers {
            imageops::overlay(&mut base, &layer.image, 0, 0);
        }
        base
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solid(name: &'static str, w: u32, h: u32, rgba: [u8; 4]) -> Layer {
        Layer {
            name,
            image: RgbaImage::from_pixel(w, h, Rgba(rgba)),
        }
    }

    #[test]
    fn test_names_preserve_order() {
        let mut stack = LayerStack::new(4, 4);
        stack.add("shadow");
        stack.add("body");
        stack.add("screen");
        assert_eq!(stack.names(), vec!["shadow", "body", "screen"]);
    }

    #[test]
    fn test_later_layers_paint_over_earlier() {
        let mut stack = LayerStack::new(2, 2);
        stack.push(solid("red", 2, 2, [255, 0, 0, 255]));
        stack.push(solid("green", 2, 2, [0, 255, 0, 255]));

        let base = RgbaImage::from_pixel(2, 2, Rgba([0, 0, 0, 255]));
        let out = stack.composite(base);
        assert_eq!(out.get_pixel(0, 0).0, [0, 255, 0, 255]);
    }

    #[test]
    fn test_transparent_layer_leaves_base_untouched() {
        let mut stack = LayerStack::new(2, 2);
        stack.add("empty");

        let base = RgbaImage::from_pixel(2, 2, Rgba([10, 20, 30, 255]));
        let out = stack.composite(base);
        assert_eq!(out.get_pixel(1, 1).0, [10, 20, 30, 255]);
    }

    #[test]
    fn test_semi_transparent_layer_blends() {
        let mut stack = LayerStack::new(1, 1);
        stack.push(solid("half-white", 1, 1, [255, 255, 255, 128]));

        let base = RgbaImage::from_pixel(1, 1, Rgba([0, 0, 0, 255]));
        let out = stack.composite(base);
        let [r, g, b, a] = out.get_pixel(0, 0).0;
        // Overlay's integer math can land one count short of full opacity.
        assert!(a >= 254, "a = {}", a);
        // Roughly half-way; overlay blends in gamma space with u8 rounding.
        assert!((120..=136).contains(&r), "r = {}", r);
        assert_eq!(r, g);
        assert_eq!(g, b);
    }
}
