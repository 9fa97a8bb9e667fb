/// Simple 3D vector used by the fixture benches
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Vec3 { x, y, z }
    }

    pub fn dot(&self, other: &Vec3) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    pub fn cross(&self, other: &Vec3) -> Vec3 {
        Vec3 {
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x,
        }
    }
}

/// Sum of all pairwise dot products
pub fn pairwise_dot(points: &[Vec3]) -> f32 {
    let mut total = 0.0;
    for a in points {
        for b in points {
            total += a.dot(b);
        }
    }
    total
}

/// Sort a copy of `values` with insertion sort
pub fn insertion_sort(values: &[u64]) -> Vec<u64> {
    let mut sorted = values.to_vec();
    for i in 1..sorted.len() {
        let mut j = i;
        while j > 0 && sorted[j - 1] > sorted[j] {
            sorted.swap(j - 1, j);
            j -= 1;
        }
    }
    sorted
}
