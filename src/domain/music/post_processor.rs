//! Audio Post Processor - 模型输出 → 可传输的 WAV
//!
//! 处理顺序（顺序敏感）:
//! 1. 声道合并：多维输入沿前导轴逐元素取算术平均
//! 2. 幅度裁剪到 [-1.0, 1.0]
//! 3. 量化：`round(v * 32767)` → i16，不做抖动
//! 4. 采样率钳制到 [1, 65535]（WAV 头部字段的有效范围）
//! 5. 编码为 WAV（每个请求独立的内存缓冲区）
//! 6. base64 编码

use base64::Engine;

use super::{AudioError, PcmWaveform, RawAudioTensor};

/// 16-bit 满刻度
pub const PCM_FULL_SCALE: f32 = 32767.0;

pub const MIN_SAMPLE_RATE: u32 = 1;
pub const MAX_SAMPLE_RATE: u32 = 65535;

/// 可放入 JSON 响应的音频
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedAudio {
    pub audio_data_base64: String,
    pub sampling_rate: u32,
    pub duration_ms: u64,
}

/// 声道合并
///
/// 一维输入原样返回；`[d0, .., dn, samples]` 视为 `d0 * .. * dn` 行，
/// 对每个采样位置取所有行的平均值
pub fn reduce_channels(tensor: &RawAudioTensor) -> Result<Vec<f32>, AudioError> {
    if tensor.is_empty() {
        return Err(AudioError::Empty);
    }
    if tensor.data().iter().any(|v| v.is_nan()) {
        return Err(AudioError::type_mismatch("audio contains NaN samples"));
    }
    if tensor.rank() == 1 {
        return Ok(tensor.data().to_vec());
    }

    let frames = tensor.frames();
    let rows = tensor.len() / frames;
    let mut sums = vec![0.0f64; frames];
    for row in tensor.data().chunks_exact(frames) {
        for (sum, &sample) in sums.iter_mut().zip(row) {
            *sum += sample as f64;
        }
    }

    // 不同声道的 +inf 与 -inf 相加得到 NaN
    let means: Vec<f32> = sums.into_iter().map(|s| (s / rows as f64) as f32).collect();
    if means.iter().any(|v| v.is_nan()) {
        return Err(AudioError::type_mismatch(
            "channel average is undefined (opposite infinite samples)",
        ));
    }
    Ok(means)
}

/// 裁剪并量化单个采样点
pub fn quantize(sample: f32) -> i16 {
    (sample.clamp(-1.0, 1.0) * PCM_FULL_SCALE).round() as i16
}

/// 采样率钳制，0 和负数都变成 1
pub fn clamp_sample_rate(rate: i64) -> u32 {
    rate.clamp(MIN_SAMPLE_RATE as i64, MAX_SAMPLE_RATE as i64) as u32
}

/// 音频后处理器
#[derive(Debug, Default, Clone, Copy)]
pub struct AudioPostProcessor;

impl AudioPostProcessor {
    pub fn new() -> Self {
        Self
    }

    /// 步骤 1-4：原始张量 → 16-bit 单声道波形
    pub fn to_waveform(
        &self,
        raw: &RawAudioTensor,
        declared_rate: i64,
    ) -> Result<PcmWaveform, AudioError> {
        let mono = reduce_channels(raw)?;
        let samples = mono.into_iter().map(quantize).collect();
        let sample_rate = clamp_sample_rate(declared_rate);
        if sample_rate as i64 != declared_rate {
            tracing::warn!(
                declared_rate = declared_rate,
                sample_rate = sample_rate,
                "Declared sample rate out of range, clamped"
            );
        }
        Ok(PcmWaveform::new(samples, sample_rate))
    }

    /// 完整流程：消费原始张量，返回 base64 WAV
    pub fn process(
        &self,
        raw: RawAudioTensor,
        declared_rate: i64,
    ) -> Result<EncodedAudio, AudioError> {
        let waveform = self.to_waveform(&raw, declared_rate)?;
        drop(raw);

        let wav = waveform.to_wav()?;
        let audio_data_base64 = base64::engine::general_purpose::STANDARD.encode(&wav);

        tracing::debug!(
            samples = waveform.samples().len(),
            sample_rate = waveform.sample_rate(),
            wav_size = wav.len(),
            "Audio post-processing completed"
        );

        Ok(EncodedAudio {
            audio_data_base64,
            sampling_rate: waveform.sample_rate(),
            duration_ms: waveform.duration_ms(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_rate_clamping() {
        let cases = [(0, 1), (1, 1), (32000, 32000), (65535, 65535), (100000, 65535)];
        for (declared, expected) in cases {
            assert_eq!(clamp_sample_rate(declared), expected, "declared {}", declared);
        }
        assert_eq!(clamp_sample_rate(-44100), 1);
    }

    #[test]
    fn test_quantize_matches_rounded_scale() {
        let values = [
            -100.0f32, -1.5, -1.0, -0.99999, -0.5, -0.25, -1e-6, 0.0, 1e-6, 0.1, 0.3333, 0.5,
            0.75, 0.99999, 1.0, 1.0001, 7.0, f32::INFINITY, f32::NEG_INFINITY,
        ];
        for v in values {
            let expected = (v.clamp(-1.0, 1.0) * 32767.0).round() as i16;
            let q = quantize(v);
            assert_eq!(q, expected, "value {}", v);
            assert!((-32767..=32767).contains(&q), "value {} -> {}", v, q);
        }
        assert_eq!(quantize(1.0), 32767);
        assert_eq!(quantize(-1.0), -32767);
        assert_eq!(quantize(2.0), 32767);
        assert_eq!(quantize(-2.0), -32767);
    }

    #[test]
    fn test_stereo_reduction() {
        let tensor = RawAudioTensor::from_rows(vec![vec![1.0, 1.0], vec![-1.0, -1.0]]).unwrap();
        assert_eq!(reduce_channels(&tensor).unwrap(), vec![0.0, 0.0]);
    }

    #[test]
    fn test_reduction_averages_before_clamping() {
        // 均值 (1.6 + 0.2) / 2 = 0.9，先裁剪再平均会得到 0.6
        let tensor = RawAudioTensor::from_rows(vec![vec![1.6], vec![0.2]]).unwrap();
        let waveform = AudioPostProcessor::new().to_waveform(&tensor, 32000).unwrap();
        assert_eq!(waveform.samples(), &[quantize(0.9)]);
    }

    #[test]
    fn test_reduction_over_all_leading_axes() {
        let tensor =
            RawAudioTensor::new(vec![2, 2, 2], vec![1.0, 0.0, 0.0, 0.0, -1.0, 0.5, 0.0, 0.5])
                .unwrap();
        assert_eq!(reduce_channels(&tensor).unwrap(), vec![0.0, 0.25]);
    }

    #[test]
    fn test_mono_passthrough() {
        let tensor = RawAudioTensor::mono(vec![0.25, -0.25]);
        assert_eq!(reduce_channels(&tensor).unwrap(), vec![0.25, -0.25]);
    }

    #[test]
    fn test_empty_input_rejected() {
        let processor = AudioPostProcessor::new();
        let err = processor.process(RawAudioTensor::mono(vec![]), 32000).unwrap_err();
        assert_eq!(err, AudioError::Empty);

        let err = processor
            .process(RawAudioTensor::new(vec![2, 0], vec![]).unwrap(), 32000)
            .unwrap_err();
        assert_eq!(err, AudioError::Empty);
    }

    #[test]
    fn test_nan_rejected() {
        let err = AudioPostProcessor::new()
            .process(RawAudioTensor::mono(vec![0.1, f32::NAN]), 32000)
            .unwrap_err();
        assert!(matches!(err, AudioError::TypeMismatch(_)));
    }

    #[test]
    fn test_opposite_infinities_rejected() {
        let tensor = RawAudioTensor::from_rows(vec![
            vec![f32::INFINITY, 0.5],
            vec![f32::NEG_INFINITY, 0.5],
        ])
        .unwrap();
        let err = AudioPostProcessor::new().to_waveform(&tensor, 32000).unwrap_err();
        assert!(matches!(err, AudioError::TypeMismatch(_)));
    }

    #[test]
    fn test_process_produces_decodable_wav() {
        let samples: Vec<f32> = (0..3200).map(|i| (i as f32 / 10.0).sin() * 1.2).collect();
        let tensor =
            RawAudioTensor::from_rows(vec![samples.clone(), samples.clone()]).unwrap();

        let encoded = AudioPostProcessor::new().process(tensor, 100000).unwrap();
        assert_eq!(encoded.sampling_rate, 65535);

        let wav = base64::engine::general_purpose::STANDARD
            .decode(&encoded.audio_data_base64)
            .unwrap();
        let reader = hound::WavReader::new(Cursor::new(wav)).unwrap();
        assert_eq!(reader.spec().sample_rate, encoded.sampling_rate);
        assert_eq!(reader.spec().channels, 1);
        assert_eq!(reader.spec().bits_per_sample, 16);

        let decoded: Vec<i16> = reader.into_samples::<i16>().map(|s| s.unwrap()).collect();
        assert_eq!(decoded.len(), samples.len());
        for (pcm, raw) in decoded.iter().zip(&samples) {
            assert_eq!(*pcm, quantize(*raw));
        }
    }
}
