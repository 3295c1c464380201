#![allow(dead_code)]

use std::path::Path;

use image::{GrayImage, Luma};

/// Camera position from the reference metadata sample.
pub const SAMPLE_CAM_POS: [f64; 3] = [1890303.161771466, 1971386.8433341454, 2396504.6261527603];

/// Write a small grayscale PNG with a bright square in the middle.
pub fn write_png(path: &Path, width: u32, height: u32) {
    let mut img = GrayImage::new(width, height);
    for y in height / 4..3 * height / 4 {
        for x in width / 4..3 * width / 4 {
            img.put_pixel(x, y, Luma([200]));
        }
    }
    img.save_with_format(path, image::ImageFormat::Png).unwrap();
}

/// Metadata document in the layout written by the survey exporter.
pub fn metadata_json(cam_pos: [f64; 3]) -> String {
    serde_json::json!({
        "Cam Pos (m)": format!("[{}, {}, {}]", cam_pos[0], cam_pos[1], cam_pos[2]),
        "FOV X (rad)": 0.3490658503988659,
        "FOV Y (rad)": 0.27580511636453603,
    })
    .to_string()
}

/// Build a data tree:
///
/// ```text
/// root/
///   Folder 001/  a.png a.json  b.png b.json  c.PNG  notes.txt
///   Folder 002/  x.png x.json (no camera position)
///   scratch/     ignored.png
///   README.md
/// ```
pub fn build_data_tree(root: &Path) {
    let f1 = root.join("Folder 001");
    let f2 = root.join("Folder 002");
    let scratch = root.join("scratch");
    for dir in [&f1, &f2, &scratch] {
        std::fs::create_dir_all(dir).unwrap();
    }

    write_png(&f1.join("a.png"), 8, 6);
    std::fs::write(f1.join("a.json"), metadata_json(SAMPLE_CAM_POS)).unwrap();
    write_png(&f1.join("b.png"), 8, 6);
    std::fs::write(f1.join("b.json"), metadata_json([0.0, 0.0, 5000.0])).unwrap();
    write_png(&f1.join("c.PNG"), 4, 4);
    std::fs::write(f1.join("notes.txt"), "not an image").unwrap();

    write_png(&f2.join("x.png"), 4, 4);
    std::fs::write(f2.join("x.json"), r#"{"FOV X (rad)": 0.3}"#).unwrap();

    write_png(&scratch.join("ignored.png"), 2, 2);
    std::fs::write(root.join("README.md"), "data").unwrap();
}
