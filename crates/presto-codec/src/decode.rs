//! Compressed-format decoding using symphonia.
//!
//! Probes the container by extension hint and decodes every packet of the
//! default track into a mono clip. Handles FLAC and WAV; multi-channel
//! sources are downmixed by averaging.

use std::fs::File;
use std::path::Path;
use symphonia::core::audio::{AudioBufferRef, Signal};
use symphonia::core::codecs::DecoderOptions;
use symphonia::core::formats::FormatOptions;
use symphonia::core::io::MediaSourceStream;
use symphonia::core::meta::MetadataOptions;
use symphonia::core::probe::Hint;

use crate::error::{CodecError, Result};
use presto_core::AudioClip;

/// Decode an audio file into a mono [`AudioClip`].
///
/// # Errors
///
/// Returns [`CodecError::Io`] when the file cannot be opened and
/// [`CodecError::Decoding`] for unrecognized or corrupt streams.
pub fn decode_clip(path: impl AsRef<Path>) -> Result<AudioClip> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let mss = MediaSourceStream::new(Box::new(file), Default::default());

    let mut hint = Hint::new();
    if let Some(ext) = path.extension().and_then(|e| e.to_str()) {
        hint.with_extension(ext);
    }

    let probed = symphonia::default::get_probe()
        .format(
            &hint,
            mss,
            &FormatOptions::default(),
            &MetadataOptions::default(),
        )
        .map_err(|e| CodecError::Decoding(format!("Failed to probe format: {e}")))?;

    let mut format = probed.format;

    let track = format
        .default_track()
        .ok_or_else(|| CodecError::Decoding("No audio track found".into()))?;

    let track_id = track.id;
    let codec_params = track.codec_params.clone();
    let sample_rate = codec_params
        .sample_rate
        .ok_or_else(|| CodecError::Decoding("Unknown sample rate".into()))?;

    let mut decoder = symphonia::default::get_codecs()
        .make(&codec_params, &DecoderOptions::default())
        .map_err(|e| CodecError::Decoding(format!("Failed to create decoder: {e}")))?;

    let mut samples: Vec<f32> = Vec::new();

    loop {
        let packet = match format.next_packet() {
            Ok(p) => p,
            Err(symphonia::core::errors::Error::IoError(ref e))
                if e.kind() == std::io::ErrorKind::UnexpectedEof =>
            {
                break;
            }
            Err(e) => return Err(CodecError::Decoding(format!("Error reading packet: {e}"))),
        };

        if packet.track_id() != track_id {
            continue;
        }

        let decoded = match decoder.decode(&packet) {
            Ok(d) => d,
            Err(symphonia::core::errors::Error::DecodeError(_)) => continue,
            Err(e) => return Err(CodecError::Decoding(format!("Decode error: {e}"))),
        };

        append_mono(&decoded, &mut samples);
    }

    tracing::debug!(
        samples = samples.len(),
        sample_rate,
        path = %path.display(),
        "decoded audio file"
    );
    Ok(AudioClip::new(samples, sample_rate)?)
}

/// Downmix one decoded buffer to mono and append it.
fn append_mono(buf: &AudioBufferRef, out: &mut Vec<f32>) {
    match buf {
        AudioBufferRef::F32(b) => {
            let frames = b.frames();
            let chans = b.spec().channels.count();
            for f in 0..frames {
                let mut acc = 0.0f32;
                for c in 0..chans {
                    acc += b.chan(c)[f];
                }
                out.push(acc / chans as f32);
            }
        }
        AudioBufferRef::S16(b) => {
            let frames = b.frames();
            let chans = b.spec().channels.count();
            for f in 0..frames {
                let mut acc = 0.0f32;
                for c in 0..chans {
                    acc += b.chan(c)[f] as f32 / 32768.0;
                }
                out.push(acc / chans as f32);
            }
        }
        AudioBufferRef::S32(b) => {
            let frames = b.frames();
            let chans = b.spec().channels.count();
            for f in 0..frames {
                let mut acc = 0.0f32;
                for c in 0..chans {
                    acc += b.chan(c)[f] as f32 / 2_147_483_648.0;
                }
                out.push(acc / chans as f32);
            }
        }
        AudioBufferRef::U8(b) => {
            let frames = b.frames();
            let chans = b.spec().channels.count();
            for f in 0..frames {
                let mut acc = 0.0f32;
                for c in 0..chans {
                    acc += (b.chan(c)[f] as f32 - 128.0) / 128.0;
                }
                out.push(acc / chans as f32);
            }
        }
        _ => {
            tracing::warn!("Unsupported sample format, skipping packet");
        }
    }
}
