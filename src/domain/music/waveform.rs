//! PCM Waveform - 16-bit 单声道波形及 WAV 封装

use std::io::Cursor;

use super::AudioError;

const BITS_PER_SAMPLE: u16 = 16;

/// 16-bit 单声道 PCM 波形
///
/// 不变量: sample_rate 位于 [1, 65535]（由 AudioPostProcessor 保证）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PcmWaveform {
    samples: Vec<i16>,
    sample_rate: u32,
}

impl PcmWaveform {
    pub(super) fn new(samples: Vec<i16>, sample_rate: u32) -> Self {
        Self {
            samples,
            sample_rate,
        }
    }

    pub fn samples(&self) -> &[i16] {
        &self.samples
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    pub fn duration_ms(&self) -> u64 {
        self.samples.len() as u64 * 1000 / self.sample_rate.max(1) as u64
    }

    /// 编码为标准 RIFF/WAVE（PCM, mono, 16-bit）
    ///
    /// 每次调用写入一个新的内存缓冲区，请求之间不共享任何文件
    pub fn to_wav(&self) -> Result<Vec<u8>, AudioError> {
        let spec = hound::WavSpec {
            channels: 1,
            sample_rate: self.sample_rate,
            bits_per_sample: BITS_PER_SAMPLE,
            sample_format: hound::SampleFormat::Int,
        };

        let mut buffer = Vec::with_capacity(44 + self.samples.len() * 2);
        {
            let cursor = Cursor::new(&mut buffer);
            let mut writer = hound::WavWriter::new(cursor, spec)?;
            for &sample in &self.samples {
                writer.write_sample(sample)?;
            }
            writer.finalize()?;
        }
        Ok(buffer)
    }
}
