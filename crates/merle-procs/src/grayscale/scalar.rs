/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */


use crate::mathops::average_of_three;

pub(crate) fn grayscale_scalar((r, g, b): (&mut [u8], &mut [u8], &mut [u8])) {
    for ((r, g), b) in r.iter_mut().zip(g.iter_mut()).zip(b.iter_mut()) {
        let gray = average_of_three(*r, *g, *b);

        *r = gray;
        *g = gray;
        *b = gray;
    }
}
