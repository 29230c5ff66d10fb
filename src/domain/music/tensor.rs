//! Raw Audio Tensor - 音频模型的原始输出
//!
//! 行优先的稠密 f32 数组 + 形状。最后一维是采样点，
//! 前面的维度是声道或 batch（例如 `[channels, samples]`）。

use serde_json::Value;

use super::AudioError;

/// 模型原始音频输出
///
/// 不变量:
/// - rank >= 1
/// - shape 各维乘积 == data.len()
#[derive(Debug, Clone, PartialEq)]
pub struct RawAudioTensor {
    shape: Vec<usize>,
    data: Vec<f32>,
}

impl RawAudioTensor {
    pub fn new(shape: Vec<usize>, data: Vec<f32>) -> Result<Self, AudioError> {
        if shape.is_empty() {
            return Err(AudioError::type_mismatch(
                "expected an array of samples, got a scalar",
            ));
        }
        let expected: usize = shape.iter().product();
        if expected != data.len() {
            return Err(AudioError::type_mismatch(format!(
                "shape {:?} needs {} samples, got {}",
                shape,
                expected,
                data.len()
            )));
        }
        Ok(Self { shape, data })
    }

    /// 单声道（一维）
    pub fn mono(samples: Vec<f32>) -> Self {
        Self {
            shape: vec![samples.len()],
            data: samples,
        }
    }

    /// 按行（声道）构建二维张量，各行长度必须一致
    pub fn from_rows(rows: Vec<Vec<f32>>) -> Result<Self, AudioError> {
        let width = rows.first().map(Vec::len).unwrap_or(0);
        if let Some(row) = rows.iter().find(|r| r.len() != width) {
            return Err(AudioError::type_mismatch(format!(
                "ragged channels: expected {} samples per channel, found {}",
                width,
                row.len()
            )));
        }
        let shape = vec![rows.len(), width];
        Ok(Self {
            shape,
            data: rows.into_iter().flatten().collect(),
        })
    }

    /// 从嵌套 JSON 数组解析
    ///
    /// 只接受数字叶子；层级不一致或长度不齐都视为类型不匹配
    pub fn from_json(value: &Value) -> Result<Self, AudioError> {
        if !value.is_array() {
            return Err(AudioError::type_mismatch(format!(
                "expected a nested array of samples, got {}",
                json_kind(value)
            )));
        }
        let mut builder = JsonTensorBuilder::default();
        builder.visit(value, 0)?;
        Self::new(builder.shape, builder.data)
    }

    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    pub fn rank(&self) -> usize {
        self.shape.len()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// 最后一维的长度（每声道采样数）
    pub fn frames(&self) -> usize {
        self.shape.last().copied().unwrap_or(0)
    }

    pub fn data(&self) -> &[f32] {
        &self.data
    }
}

#[derive(Default)]
struct JsonTensorBuilder {
    shape: Vec<usize>,
    data: Vec<f32>,
    leaf_depth: Option<usize>,
}

impl JsonTensorBuilder {
    fn visit(&mut self, value: &Value, depth: usize) -> Result<(), AudioError> {
        match value {
            Value::Array(items) => {
                if matches!(self.leaf_depth, Some(d) if depth >= d) {
                    return Err(AudioError::type_mismatch(format!(
                        "mixed nesting: array found at sample depth {}",
                        depth
                    )));
                }
                if depth == self.shape.len() {
                    self.shape.push(items.len());
                } else if self.shape[depth] != items.len() {
                    return Err(AudioError::type_mismatch(format!(
                        "ragged array at depth {}: expected {} elements, found {}",
                        depth,
                        self.shape[depth],
                        items.len()
                    )));
                }
                for item in items {
                    self.visit(item, depth + 1)?;
                }
                Ok(())
            }
            Value::Number(n) => {
                match self.leaf_depth {
                    None => self.leaf_depth = Some(depth),
                    Some(d) if d != depth => {
                        return Err(AudioError::type_mismatch(format!(
                            "mixed nesting: sample found at depth {}, expected {}",
                            depth, d
                        )));
                    }
                    Some(_) => {}
                }
                if depth != self.shape.len() {
                    return Err(AudioError::type_mismatch(format!(
                        "mixed nesting: sample found at depth {}",
                        depth
                    )));
                }
                let sample = n
                    .as_f64()
                    .ok_or_else(|| AudioError::type_mismatch(format!("unreadable number {}", n)))?;
                let narrowed = sample as f32;
                if !narrowed.is_finite() {
                    return Err(AudioError::type_mismatch(format!(
                        "sample {} is outside the f32 range",
                        n
                    )));
                }
                self.data.push(narrowed);
                Ok(())
            }
            other => Err(AudioError::type_mismatch(format!(
                "expected a number, got {}",
                json_kind(other)
            ))),
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
