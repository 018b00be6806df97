use js_sys::Array;
use wasm_bindgen::prelude::*;

pub fn parse_js_point<const D: usize>(val: &JsValue) -> Option<[f64; D]> {
    let arr = val.dyn_ref::<Array>()?;
    if arr.length() < D as u32 {
        return None;
    }
    let mut point = [0.0; D];
    for i in 0..D {
        point[i] = arr.get(i as u32).as_f64()?;
    }
    Some(point)
}

/// Reads `[[x, y, ..], [x, y, ..], ..]` into points.
pub fn parse_js_points<const D: usize>(val: &JsValue) -> Result<Vec<[f64; D]>, JsError> {
    let arr = val
        .dyn_ref::<Array>()
        .ok_or_else(|| JsError::new("expected an array of points"))?;
    let mut points = Vec::with_capacity(arr.length() as usize);
    for i in 0..arr.length() {
        let point = parse_js_point::<D>(&arr.get(i))
            .ok_or_else(|| JsError::new(&format!("entry {i} is not a point with {D} numeric coordinates")))?;
        points.push(point);
    }
    Ok(points)
}
