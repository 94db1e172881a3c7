/*!
# Operations

| Line       | Effect                                        |
|------------|-----------------------------------------------|
| `n`        | Accumulator becomes `n`                       |
| `+n`       | Add `n`                                       |
| `-n`       | Subtract `n`                                  |
| `*n`       | Multiply by `n`                               |
| `/n`       | Divide by `n`                                 |
| `%n`       | IEEE remainder after dividing by `n`          |
| `^n`       | Raise to the power `n`                        |
| `_`        | Negate                                        |
| `SQRT`     | Square root                                   |
| `SIN`      | Sine                                          |
| `COS`      | Cosine                                        |
| `TAN`      | Tangent                                       |
| `CTN`      | Cotangent                                     |
| `ASIN`     | Arcsine                                       |
| `ACOS`     | Arccosine                                     |
| `ATAN`     | Arctangent                                    |
| `ACTN`     | Arccotangent, in (0, π)                       |
| `RAD`      | Read and write angles in radians              |
| `DEG`      | Read and write angles in degrees (the default)|

## Numbers
Digits with an optional decimal point, at most ten digits in all.
`%` rounds the quotient to the nearest integer, ties to even, so
`7` then `%2` gives `-1`.

## Bad arguments
None of these stop the calculator. A diagnostic goes to stderr and
the accumulator takes the value below.

| Operation            | Rejected when              | Accumulator becomes |
|----------------------|----------------------------|---------------------|
| `/`, `%`             | `n` is zero                | unchanged           |
| `SQRT`               | not positive               | unchanged           |
| `ASIN`               | magnitude above 1          | unchanged           |
| `ACOS`               | magnitude above 1          | `inf`               |
| `ATAN`               | magnitude at least π/2     | unchanged           |
| `ACTN`               | zero, or magnitude ≥ π     | unchanged           |

`TAN` where the cosine vanishes gives 16331239353195370 and `CTN` where
the sine vanishes gives `inf`; neither is reported.

*/
