#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(dataset) = dicom_lite_parser::parse(data) else {
        return;
    };

    for (tag, element) in dataset.iter() {
        // every recorded value must lie within the input
        assert!(element.offset + element.length <= data.len());
        let _ = dataset.to_display_string(tag);
    }
});
