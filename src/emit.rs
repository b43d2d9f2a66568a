/// Byte sink used by the encoder and the splicer.
pub trait Emitter {
    fn emit_bytes(&mut self, b: &[u8]);
    fn emit_byte(&mut self, b: u8) {
        self.emit_bytes(&[b]);
    }
    fn emit_str(&mut self, s: &str) {
        self.emit_bytes(s.as_bytes());
    }
}

impl Emitter for Vec<u8> {
    #[inline]
    fn emit_bytes(&mut self, b: &[u8]) {
        self.extend_from_slice(b);
    }
    #[inline]
    fn emit_byte(&mut self, b: u8) {
        self.push(b);
    }
}

/// Emitter that writes into a fixed window and reports whether it fit.
/// Used for in-place overwrites where the destination cannot grow.
pub struct SliceEmitter<'a> {
    buf: &'a mut [u8],
    pos: usize,
    overflow: bool,
}

impl<'a> SliceEmitter<'a> {
    pub fn new(buf: &'a mut [u8]) -> Self {
        Self { buf, pos: 0, overflow: false }
    }
    pub fn written(&self) -> usize {
        self.pos
    }
    pub fn overflowed(&self) -> bool {
        self.overflow
    }
}

impl<'a> Emitter for SliceEmitter<'a> {
    fn emit_bytes(&mut self, b: &[u8]) {
        let end = self.pos + b.len();
        match self.buf.get_mut(self.pos..end) {
            Some(dst) if !self.overflow => {
                dst.copy_from_slice(b);
                self.pos = end;
            }
            _ => self.overflow = true,
        }
    }
}
