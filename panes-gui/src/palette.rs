/// Line colours cycled through by series index.
const SERIES_COLORS: [(u8, u8, u8); 10] = [
    (31, 119, 180),
    (255, 127, 14),
    (44, 160, 44),
    (214, 39, 40),
    (148, 103, 189),
    (140, 86, 75),
    (227, 119, 194),
    (127, 127, 127),
    (188, 189, 34),
    (23, 190, 207),
];

pub(crate) fn series_rgb(idx: usize) -> (u8, u8, u8) {
    SERIES_COLORS[idx % SERIES_COLORS.len()]
}

pub(crate) fn series_color(idx: usize) -> egui::Color32 {
    let (r, g, b) = series_rgb(idx);
    egui::Color32::from_rgb(r, g, b)
}
