//! # 像素表面抽象模块
//!
//! 嵌入算法只通过 [`PixelSurface`] 读写像素，
//! 与具体图像库的内部表示解耦。

use image::{Rgb, RgbImage};

/// 可按坐标读写 RGB 三元组的二维像素表面。
///
/// 坐标原点在左上角，x 向右，y 向下。实现方保证
/// `(x, y)` 在 `width() × height()` 范围内时读写有效。
pub trait PixelSurface {
    /// 表面宽度 (像素)。
    fn width(&self) -> u32;

    /// 表面高度 (像素)。
    fn height(&self) -> u32;

    /// 读取 `(x, y)` 处的 RGB 值。
    fn get(&self, x: u32, y: u32) -> (u8, u8, u8);

    /// 写入 `(x, y)` 处的 RGB 值。
    fn set(&mut self, x: u32, y: u32, rgb: (u8, u8, u8));
}

impl PixelSurface for RgbImage {
    fn width(&self) -> u32 {
        self.dimensions().0
    }

    fn height(&self) -> u32 {
        self.dimensions().1
    }

    fn get(&self, x: u32, y: u32) -> (u8, u8, u8) {
        let Rgb([r, g, b]) = *self.get_pixel(x, y);
        (r, g, b)
    }

    fn set(&mut self, x: u32, y: u32, (r, g, b): (u8, u8, u8)) {
        self.put_pixel(x, y, Rgb([r, g, b]));
    }
}
