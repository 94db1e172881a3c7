/*!
# Introductory Tutorial

Start the calculator from a terminal. There is no banner and no
prompt; type a line and press ENTER. Every line prints the value
the calculator is holding, called the accumulator. It starts at zero.
Type CTRL-D to leave.

<pre><code>&nbsp;> 5
&nbsp;  5.00000000000000000000
&nbsp;> +3
&nbsp;  8.00000000000000000000
&nbsp;> *2
&nbsp;  16.00000000000000000000
&nbsp;> _
&nbsp;  -16.00000000000000000000
</code></pre>

A line starting with a digit replaces the accumulator. Anything else
begins with an operation name. Operations such as `+` and `^` take a
number after the name, spaces between them are allowed. Others like
`SQRT` work on the accumulator alone. There is no minus sign for numbers;
negate with `_` instead.

Names are upper case. An unknown name prints a diagnostic and leaves
everything as it was.

<pre><code>&nbsp;> sqrt
&nbsp;  UNRECOGNIZED OPERATION IN (0..1); sqrt
&nbsp;  -16.00000000000000000000
</code></pre>

Angles are read in degrees until you switch with `RAD`. `DEG` switches
back.

<pre><code>&nbsp;> 90
&nbsp;  90.00000000000000000000
&nbsp;> SIN
&nbsp;  1.00000000000000000000
</code></pre>

Numbers are limited to ten digits. Whatever is left over on the line
is reported and ignored.

Piping a file works the same way, one output line per input line,
diagnostics on stderr.

```text
$ printf '2\nSQRT\n' | calc
2.00000000000000000000
1.41421356237309514547
```

Set `RUST_LOG=debug` to trace how each line was matched.

*/
