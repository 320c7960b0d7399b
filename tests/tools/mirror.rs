use std::fs;

use image::{Rgba, RgbaImage};
use sprkit::{
	config::ToolConfig,
	sprkit_types::{
		anchor::{MirrorJob, MirrorSource, mirror::frame_file_name},
		file::{SpriteOffsets, sprite_offsets::render_sections},
	},
};

#[test_log::test]
fn test_mirror_all_default_pairs() {
	let input = tempfile::tempdir().unwrap();
	let output = tempfile::tempdir().unwrap();

	// only direction 3 is drawn; the others take the assumed size path
	let mut frame = RgbaImage::new(24, 48);
	frame.put_pixel(0, 0, Rgba([10, 20, 30, 255]));
	for index in 0..2 {
		frame.save(input.path().join(frame_file_name(167, 3, index))).unwrap();
	}

	let config = ToolConfig::default().mirror;
	let mut job = MirrorJob::new(config.base_id, input.path(), output.path());
	job.source_offsets = config.source_offsets;
	let outcomes = job.run(&config.pairs).unwrap();

	let sources: Vec<_> = outcomes.iter().map(|o| o.source).collect();
	assert!(matches!(sources[0], MirrorSource::Assumed(_)));
	assert_eq!(
		sources[3],
		MirrorSource::Disk {
			frames: 2
		}
	);

	let text = render_sections(outcomes.iter().map(|o| &o.section));
	let parsed = SpriteOffsets::parse(&text);
	assert_eq!(parsed.len(), 4);

	// 0 -> 4 rotated: (3, -42) -> (20, 89)
	let first = parsed.get(167, 4).unwrap().frame(0).unwrap();
	assert_eq!((first.dx, first.dy), (20, 89));
	assert_eq!(first.bmp.as_deref(), Some("167-4-000.png"));
	// 1 -> 5 vertical: (13, -44) -> (13, 91)
	assert_eq!(parsed.get(167, 5).unwrap().frame(0).map(|f| (f.dx, f.dy)), Some((13, 91)));
	// 3 -> 7 horizontal from disk, real size 24x48: (-5, -41) -> (28, -41)
	let seven = parsed.get(167, 7).unwrap();
	assert_eq!(seven.frames.len(), 2);
	assert_eq!(seven.frame(1).map(|f| (f.dx, f.dy)), Some((28, -41)));
	assert_eq!(seven.anchor.as_deref(), Some("167-7-a.bmp"));

	assert!(text.contains("\n\n#167-5\n"));
	assert!(text.ends_with("type=CHARACTER\n"));

	let mirrored = image::open(output.path().join("167-7-001.png")).unwrap().to_rgba8();
	assert_eq!(mirrored.get_pixel(23, 0), &Rgba([10, 20, 30, 255]));
	assert!(!output.path().join("167-4-000.png").exists());
	assert_eq!(fs::read_dir(output.path()).unwrap().count(), 2);
}
